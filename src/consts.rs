pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_ROLE_TOKENS: i32 = 50;
pub const DEFAULT_MAX_PROMPT_TOKENS: i32 = 1000;
pub const DEFAULT_MAX_RESPONSE_TOKENS: i32 = 2950;
pub const DEFAULT_TOKEN_PRICE: f64 = 0.000002;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_CHARS_PER_TOKEN: f64 = 1.0;

/// Creativity levels are tenths of a temperature point.
pub const CREATIVITY_DIVISOR: f64 = 10.0;
pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 2.0;

pub const READ_TIMEOUT_SECS: u64 = 60;
pub const SERVER_PORT: u16 = 8080;

pub const CONFIG_FILE_ENV: &str = "AE_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "./config.json";

pub const CHAT_ROLE: &str = "Представь ты самая огромная база знаний и можешь оперативно и точно \
     выдавать необходимую информацию.";

pub const PROMPT_ARTICLE_PREFIX: &str = " Вот есть статья: ";

pub const PROMPT_INSTRUCTIONS: &str = " Я ничего не знаю в этой области. Расскажи мне пожалуйста подробно \
     о всех нюансах о всех вариантах что могут быть связаны с этой \
     статьёй. Прокачай эту статью. Расширь ее, расскажи о дополнительных \
     нюансах, добавь все важное что может быть связано с этим \
     направлением. Напиши перечень смежных направлений что как-то связано \
     с этим направлением. Напиши перспективные направления. Размер статьи ";

pub const PROMPT_LENGTH_SUFFIX: &str = " символов.";
