//! Wire types for the trivia API and their translation into `Question`.

use serde::Deserialize;

use crate::core::question::{Difficulty, Question, QuestionKind};

/// Response code the API uses for "not enough questions for this query".
pub const CODE_INSUFFICIENT: i64 = 1;

/// Top-level JSON body of `GET /api.php`.
#[derive(Deserialize, Debug)]
pub struct ApiEnvelope {
    #[serde(alias = "responseCode")]
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<ApiQuestion>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiQuestion {
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: String,
    pub question: String,
    #[serde(alias = "correctAnswer")]
    pub correct_answer: String,
    #[serde(alias = "incorrectAnswers", default)]
    pub incorrect_answers: Vec<String>,
}

impl ApiQuestion {
    /// Decodes HTML entities in every text field and derives shuffled options.
    pub fn into_question(self) -> Question {
        Question::new(
            self.kind,
            self.difficulty,
            decode_entities(&self.category),
            decode_entities(&self.question),
            decode_entities(&self.correct_answer),
            self.incorrect_answers
                .iter()
                .map(|a| decode_entities(a))
                .collect(),
        )
    }
}

/// Replaces the HTML entities the trivia API emits with their characters.
///
/// Handles numeric (`&#039;`, `&#x27;`) and the common named entities.
/// Unknown or malformed entities are kept verbatim.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        // Entities are short; a `;` further away than this is not ours.
        let decoded = tail[1..]
            .char_indices()
            .take(10)
            .find(|&(_, c)| c == ';')
            .and_then(|(end, _)| {
                let name = &tail[1..=end];
                decode_entity(name).map(|c| (c, end + 2))
            });

        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    let c = match name {
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',
        "lt" => '<',
        "gt" => '>',
        "nbsp" => '\u{a0}',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "deg" => '°',
        "eacute" => 'é',
        "Eacute" => 'É',
        "aacute" => 'á',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "ntilde" => 'ñ',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "auml" => 'ä',
        "szlig" => 'ß',
        "shy" => '\u{ad}',
        _ => return None,
    };
    Some(c)
}
