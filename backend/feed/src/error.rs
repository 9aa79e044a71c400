use thiserror::Error;

use crate::models::GraphqlError;

pub const FALLBACK_MESSAGE: &str = "Failed to fetch emergencies";

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("{}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),

    #[error("No data received from server")]
    MissingData,

    #[error("Invalid {field} \"{value}\" on emergency {id}")]
    InvalidRecord {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to fetch emergencies")]
    Unknown,
}

fn join_messages(errors: &[GraphqlError]) -> String {
    let joined = errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if joined.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(messages: &[&str]) -> FeedError {
        FeedError::Graphql(
            messages
                .iter()
                .map(|message| GraphqlError {
                    message: message.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_joins_in_order() {
        assert_eq!(errors(&["x", "y"]).to_string(), "x, y");
        assert_eq!(errors(&["only"]).to_string(), "only");
        assert_eq!(errors(&["b", "a", "c"]).to_string(), "b, a, c");
    }

    #[test]
    fn test_blank_messages_fall_back() {
        assert_eq!(errors(&[""]).to_string(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            FeedError::MissingData.to_string(),
            "No data received from server"
        );
        assert_eq!(FeedError::Unknown.to_string(), "Failed to fetch emergencies");
    }
}
