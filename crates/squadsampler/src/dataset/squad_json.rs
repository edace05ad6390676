//! # `SQuAD` JSON Records

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SSResult;

/// Root of a `SQuAD`-style dataset file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SquadDataset {
    /// The articles.
    pub data: Vec<SquadArticle>,

    /// Uninterpreted fields (``version``, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One article: a titled list of paragraphs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SquadArticle {
    /// Optional article title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The paragraphs.
    pub paragraphs: Vec<SquadParagraph>,

    /// Uninterpreted fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One context paragraph and the questions asked about it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SquadParagraph {
    /// The context text.
    pub context: String,

    /// The questions.
    pub qas: Vec<SquadQuestion>,

    /// Uninterpreted fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One question with its answer annotations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SquadQuestion {
    /// Unique question id.
    pub id: String,

    /// The question text.
    pub question: String,

    /// Answer annotations; absent means none.
    #[serde(default)]
    pub answers: Vec<SquadAnswer>,

    /// Question type tag (``factoid``, ``list``, ``yesno``, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,

    /// Yes/no flag, for yes/no questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_is_yes: Option<bool>,

    /// Uninterpreted fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One character-anchored answer annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SquadAnswer {
    /// The answer text.
    pub text: String,

    /// Character offset of the answer in the paragraph context.
    ///
    /// Signed: converted datasets mark answers with no span (yes/no) as `-1`.
    pub answer_start: i64,
}

impl SquadDataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> SSResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dataset from a JSON reader.
    pub fn from_reader<R: BufRead>(reader: R) -> SSResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a dataset from an already-parsed JSON value.
    pub fn from_value(value: Value) -> SSResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Append the articles of `other`.
    pub fn extend(
        &mut self,
        other: SquadDataset,
    ) {
        self.data.extend(other.data);
    }

    /// Iterate over all paragraphs, in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &SquadParagraph> {
        self.data.iter().flat_map(|a| a.paragraphs.iter())
    }

    /// Iterate over all questions, in order.
    pub fn questions(&self) -> impl Iterator<Item = &SquadQuestion> {
        self.paragraphs().flat_map(|p| p.qas.iter())
    }

    /// The total number of paragraphs.
    pub fn num_paragraphs(&self) -> usize {
        self.data.iter().map(|a| a.paragraphs.len()).sum()
    }

    /// The total number of questions.
    pub fn num_questions(&self) -> usize {
        self.paragraphs().map(|p| p.qas.len()).sum()
    }
}
