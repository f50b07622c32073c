//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# randusers configuration
#
# Precedence: environment variables > this file > built-in defaults.
# Regenerate with: randusers config --reset

# Random user endpoint, without query string (env: RANDUSERS_API_URL)
api_url = "{api_url}"

# Page requested from the API
page = {page}

# Seconds before a request is abandoned (env: RANDUSERS_TIMEOUT_SECS)
request_timeout_secs = {timeout}

# How long a card shows "copied" after a successful copy, in milliseconds (min 500)
copy_flash_ms = {flash}

# strftime pattern for the birth date in copied details ("%-m/%-d/%Y" = 4/9/1983)
date_format = "{date_format}"

# Colour theme: dark, light, monokai, dracula, nord, solarized (env: RANDUSERS_THEME)
theme = "{theme}"

[logging]
# trace, debug, info, warn, error (RUST_LOG overrides with a full filter)
level = "{level}"
# Write JSON logs to rotating files in addition to the in-app log panel
file_enabled = {file_enabled}
file_dir = "{file_dir}"
# hourly, daily or never
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            api_url = escape(&self.api_url),
            page = self.page,
            timeout = self.request_timeout_secs,
            flash = self.copy_flash_ms,
            date_format = escape(self.date_style.pattern()),
            theme = escape(&self.theme),
            level = escape(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = escape(&self.logging.file_dir.display().to_string()),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
