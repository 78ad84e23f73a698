/// Relation and label names the movie graph exposes to the query model
pub const DEFAULT_SCHEMA_HINT: &str = "DIRECTED, roles, ACTED_IN, PRODUCED, Movie";

/// Explanation used when the query matched nothing; no model call is made
pub const NO_RESULTS_MESSAGE: &str = "No results found in the database.";

/// Prompt asking the model to turn the latest question into one Cypher query
pub fn cypher_generation_prompt(schema_hint: &str, transcript: &str, question: &str) -> String {
    format!(
        "Convert the final user's request into a Cypher query. \
         Use the DB relations ({schema_hint}). \
         If the user refers to prior answers, use the previous Cypher/Results from the conversation. \
         Return only the query (you may wrap it in ```cypher ... ```).\n\n\
         Conversation:\n{transcript}\nUser: {question}\n"
    )
}

/// Prompt asking the model to answer from the query results only
pub fn explanation_prompt(transcript: &str, question: &str, results: &str) -> String {
    format!(
        "Given the conversation and these DB results, reply normally to the user's last question in a human friendly way. \
         Only use the data from the DB results. Do not invent facts.\n\n\
         Conversation:\n{transcript}\nUser: {question}\nResults: {results}\n\nAnswer:"
    )
}
