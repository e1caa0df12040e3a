use crate::config::EnhanceDefaults;
use crate::consts;
use crate::errors::EnhanceError;
use crate::models::form::EnhanceForm;
use crate::models::request::{ChatCompletionCreate, Message};

/// Everything the completion call needs, assembled from one form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub chat_role: String,
    pub prompt: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: i32,
    pub token_price: f64,
}

fn parse_number(field: &str, value: &str) -> Result<f64, EnhanceError> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| EnhanceError::from(format!("error: {field} is not a number: {value:?}")))?;
    if !number.is_finite() {
        return Err(format!("error: {field} is not finite: {value:?}").into());
    }
    Ok(number)
}

pub fn resolve_temperature(creativity: &str, default: f64) -> Result<f64, EnhanceError> {
    if creativity.trim().is_empty() {
        return Ok(default);
    }

    let temperature = parse_number("creativity level", creativity)? / consts::CREATIVITY_DIVISOR;
    if !(consts::MIN_TEMPERATURE..=consts::MAX_TEMPERATURE).contains(&temperature) {
        return Err(EnhanceError::ValidationError(format!(
            "error: temperature {temperature} out of range"
        )));
    }
    Ok(temperature)
}

pub fn chars_to_tokens(chars: f64, chars_per_token: f64) -> Result<i32, EnhanceError> {
    let tokens = (chars / chars_per_token).round_ties_even();
    if !tokens.is_finite() || tokens < 1.0 || tokens > i32::MAX as f64 {
        return Err(EnhanceError::ValidationError(format!(
            "error: character count {chars} gives no usable token budget"
        )));
    }
    Ok(tokens as i32)
}

/// Returns `(max_tokens, max_length)`: the response token budget and the
/// article length quoted in the prompt.
pub fn resolve_response_budget(
    char_count: &str,
    defaults: &EnhanceDefaults,
) -> Result<(i32, i32), EnhanceError> {
    if char_count.trim().is_empty() {
        return Ok((defaults.max_response_tokens, defaults.max_response_tokens));
    }

    let chars = parse_number("character count", char_count)?;
    let max_tokens = chars_to_tokens(chars, defaults.chars_per_token)?;
    let max_length = chars_to_tokens(chars, defaults.chars_per_token)?;
    Ok((max_tokens, max_length))
}

pub fn resolve_model(model: &str, default: &str) -> String {
    let model = model.trim();
    if model.is_empty() {
        default.to_string()
    } else {
        model.to_string()
    }
}

pub fn build_prompt(article: &str, details: &str, max_length: i32) -> String {
    let mut prompt = String::new();

    prompt.push_str(consts::PROMPT_ARTICLE_PREFIX);
    prompt.push('[');
    prompt.push_str(article);
    prompt.push(']');
    if !details.trim().is_empty() {
        prompt.push_str(". ");
        prompt.push_str(details);
    }

    prompt.push_str(consts::PROMPT_INSTRUCTIONS);
    prompt.push_str(&max_length.to_string());
    prompt.push_str(consts::PROMPT_LENGTH_SUFFIX);

    prompt
}

pub fn estimate_tokens(text: &str, chars_per_token: f64) -> i32 {
    let chars = text.chars().count() as f64;
    (chars / chars_per_token).round_ties_even().min(i32::MAX as f64) as i32
}

/// Logs a warning when `text` is estimated to exceed `budget`. Returns
/// whether the text fits.
pub fn check_budget(label: &str, text: &str, budget: i32, chars_per_token: f64) -> bool {
    let estimated = estimate_tokens(text, chars_per_token);
    if estimated > budget {
        log::warn!("{label} is ~{estimated} tokens, over the budget of {budget}");
        return false;
    }
    true
}

pub fn build_completion_params(
    form: &EnhanceForm,
    defaults: &EnhanceDefaults,
) -> Result<CompletionParams, EnhanceError> {
    let model = resolve_model(&form.model(), &defaults.model);
    let temperature = resolve_temperature(&form.creativity(), defaults.temperature)?;
    let (max_tokens, max_length) = resolve_response_budget(&form.char_count(), defaults)?;

    let chat_role = consts::CHAT_ROLE.to_string();
    let prompt = build_prompt(&form.article(), &form.details(), max_length);

    check_budget(
        "chat role",
        &chat_role,
        defaults.max_role_tokens,
        defaults.chars_per_token,
    );
    check_budget(
        "prompt",
        &prompt,
        defaults.max_prompt_tokens,
        defaults.chars_per_token,
    );

    Ok(CompletionParams {
        chat_role,
        prompt,
        model,
        temperature,
        max_tokens,
        token_price: defaults.token_price,
    })
}

pub fn build_chat_request(params: &CompletionParams) -> ChatCompletionCreate {
    ChatCompletionCreate {
        model: params.model.clone(),
        messages: vec![
            Message::system(params.chat_role.clone()),
            Message::user(params.prompt.clone()),
        ],
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}
