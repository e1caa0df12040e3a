use crate::config::{Config, EnhanceDefaults};
use crate::models::form::{EnhanceForm, FormValue};

fn text_field(value: &str) -> Option<FormValue> {
    Some(FormValue::from(value))
}

pub fn create_test_form(
    article: &str,
    details: &str,
    creativity: &str,
    char_count: &str,
    model: &str,
) -> EnhanceForm {
    EnhanceForm {
        textarea1: text_field(article),
        textarea2: text_field(details),
        dropdown1: text_field(creativity),
        dropdown2: text_field(char_count),
        dropdown3: text_field(model),
    }
}

pub fn create_test_config(api_url: String) -> Config {
    Config {
        api_url,
        api_key: "test-key".to_string(),
        defaults: EnhanceDefaults::default(),
    }
}
