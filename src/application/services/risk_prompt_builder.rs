use crate::application::ports::{CompletionRequest, ResponseFormat};
use crate::domain::{ANALYSIS_UNAVAILABLE, MAX_EXCERPT_CHARS, MIN_SUMMARY_CHARS};

pub const ANALYSIS_TEMPERATURE: f32 = 0.0;

pub const SYSTEM_INSTRUCTION: &str = "You are an expert analyst of Korean contracts. \
Respond with JSON only. The top-level object must contain the keys summary, riskItems and forms.";

/// Builds the instruction payload for a risk analysis. Pure: the same document
/// text always produces the same request.
pub struct RiskPromptBuilder;

impl RiskPromptBuilder {
    pub fn build(document_text: &str) -> CompletionRequest {
        CompletionRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_prompt: Self::user_prompt(document_text),
            temperature: ANALYSIS_TEMPERATURE,
            response_format: ResponseFormat::Json,
        }
    }

    fn user_prompt(document_text: &str) -> String {
        format!(
            "[Role] You are an expert analyst of Korean contracts. Output JSON only and include the \
top-level keys summary, riskItems and forms.

Read the contract below and analyse the risk of every clause in fine detail. Write all field values in Korean.

Rules:
- summary: a detailed, structured summary of the whole contract covering the key points of every clause, at least {MIN_SUMMARY_CHARS} characters long.
- riskItems: an array of risky clauses. Every element has exactly the fields type, risk_level, excerpt, reason and suggested_fix.
- risk_level is one of HIGH, MEDIUM or LOW.
- Sort riskItems by risk_level: every HIGH item first, then MEDIUM, then LOW.
- excerpt quotes the original clause text and is at most {MAX_EXCERPT_CHARS} characters.
- Never repeat the same reason, and never repeat the same combination of type and excerpt.
- reason: explain in at least 2-3 paragraphs how the clause can cause real problems when the contract is executed, citing the concrete legal basis (statutes or precedents).
- suggested_fix: name the applicable legal provision and give concrete replacement wording that can be used in the actual contract.
- If a clause cannot be analysed, set both reason and suggested_fix to \"{ANALYSIS_UNAVAILABLE}\".
- forms: legal forms or templates the user additionally needs, each with type, description and downloadUrl. Use an empty array when none apply.
- Return only the JSON object. No explanations, no markdown, no text before or after it.

JSON fields:
- summary: summary of the whole contract
- riskItems: [ {{ \"type\": \"clause type\", \"risk_level\": \"HIGH | MEDIUM | LOW\", \"excerpt\": \"original text\", \"reason\": \"why it is risky\", \"suggested_fix\": \"proposed revision\" }} ]
- forms: [ {{ \"type\": \"form type\", \"description\": \"form description\", \"downloadUrl\": \"download link\" }} ]

Contract text:
{document_text}
"
        )
    }
}
