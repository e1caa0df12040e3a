use serde_json::{Value, json};

pub fn sample_completion_response() -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-3.5-turbo-0125",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": "Расширенная статья о владении в Rust."
            },
            "logprobs": null,
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 310,
            "completion_tokens": 640,
            "total_tokens": 950
        },
        "system_fingerprint": "fp_test"
    })
}

pub fn sample_form() -> Value {
    json!({
        "textarea1": "Ownership in Rust",
        "textarea2": "Mention borrowing",
        "dropdown1": "5",
        "dropdown2": "1000",
        "dropdown3": ""
    })
}
