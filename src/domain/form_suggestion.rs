use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSuggestion {
    #[serde(rename = "type")]
    pub form_type: String,
    pub description: String,
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

impl FormSuggestion {
    pub fn new(form_type: String, description: String, download_url: String) -> Self {
        Self {
            form_type,
            description,
            download_url,
        }
    }
}
