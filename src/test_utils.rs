#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

    fn question(index: usize) -> Value {
        json!({
            "question": format!("Sample question {}?", index + 1),
            "options": ["First", "Second", "Third", "Fourth"],
            "correctAnswers": [index % 4],
            "multipleChoice": false,
            "difficulty": DIFFICULTIES[index % DIFFICULTIES.len()],
            "explanation": "Because the sample says so.",
            "category": "Samples"
        })
    }

    /// A provider reply of `count` well-formed questions with ids from `first_id`.
    pub fn provider_reply(count: usize, first_id: u64) -> String {
        let items: Vec<Value> = (0..count)
            .map(|index| {
                let mut item = question(index);
                item["id"] = json!(first_id + index as u64);
                item
            })
            .collect();
        Value::Array(items).to_string()
    }

    /// Same as [`provider_reply`] but with the `id` keys left out.
    pub fn provider_reply_without_ids(count: usize) -> String {
        Value::Array((0..count).map(question).collect()).to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_provider_reply_numbers_ids() {
        let reply: serde_json::Value = serde_json::from_str(&provider_reply(3, 11)).unwrap();
        let ids: Vec<u64> = reply
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_u64().unwrap())
            .collect();

        assert_eq!(ids, vec![11, 12, 13]);
    }

    #[test]
    fn test_provider_reply_without_ids_omits_ids() {
        let reply: serde_json::Value =
            serde_json::from_str(&provider_reply_without_ids(2)).unwrap();
        let items = reply.as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|q| q.get("id").is_none()));
    }
}
