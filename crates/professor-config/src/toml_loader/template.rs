//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Professor Geral Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The API key is read from GEMINI_API_KEY (or API_KEY), never from this file.

[session]
# depth_level = "detailed"        # concise, detailed, academic
# use_search_grounding = false    # cite Google Search sources in answers

[model]
# name = "gemini-2.5-flash"
# temperature = 0.7               # 0.0-2.0
# max_output_tokens = 8192        # 1-65536

[logging]
# level = "INFO"                  # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
