use std::sync::Arc;

use rand::{Rng, seq::SliceRandom};

use crate::{
    alignment::{AlignOutcome, AlignmentStats, AnswerAligner},
    dataset::{SquadDataset, SquadParagraph},
    sampling::{CharOffsetIndex, QaRecord, QuestionTypeFilter, SamplerOptions},
    tokenizer::{OffsetTokenizer, TokenizedText},
    types::TokenType,
};

/// Counters collected while building a [`QaPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct PoolStats {
    /// Paragraphs tokenized.
    pub paragraphs: usize,

    /// Questions seen.
    pub questions: usize,

    /// Questions dropped by the question type filter.
    pub filtered: usize,

    /// Records dropped by the `instances_per_epoch` cap.
    pub truncated: usize,

    /// Answer alignment outcomes.
    pub answers: AlignmentStats,
}

/// A built record pool and its char-offset index.
#[derive(Debug, Clone)]
pub struct QaPool<T: TokenType> {
    /// The records, in sampling order.
    pub records: Vec<Arc<QaRecord<T>>>,

    /// Question id to context char offsets; covers every question seen.
    pub char_offsets: CharOffsetIndex<T>,

    /// Build counters.
    pub stats: PoolStats,
}

/// The records of one paragraph.
struct ParagraphRecords<T: TokenType> {
    paragraph: Arc<SquadParagraph>,
    context: Arc<TokenizedText<T>>,
    records: Vec<QaRecord<T>>,
    stats: PoolStats,
}

/// Tokenize one paragraph and align the answers of each of its questions.
fn build_paragraph<T: TokenType>(
    paragraph: Arc<SquadParagraph>,
    tokenizer: &OffsetTokenizer<T>,
    filter: &QuestionTypeFilter,
) -> ParagraphRecords<T> {
    let context = Arc::new(tokenizer.tokenize(&paragraph.context));

    let mut stats = PoolStats {
        paragraphs: 1,
        ..Default::default()
    };
    let mut records = Vec::with_capacity(paragraph.qas.len());

    for (question_index, qa) in paragraph.qas.iter().enumerate() {
        stats.questions += 1;

        let mut aligner = AnswerAligner::new(&context.offsets);
        for answer in &qa.answers {
            let answer_tokens = tokenizer.tokenize(&answer.text);
            let answer_len = answer_tokens.len();

            let outcome = aligner.align(answer.answer_start, answer_len, answer_tokens.ids);
            if outcome == AlignOutcome::Unaligned {
                log::debug!(
                    "question {}: answer {:?} at char {} is not on a token boundary; skipped",
                    qa.id,
                    answer.text,
                    answer.answer_start
                );
            }
        }
        stats.answers += aligner.stats();

        if !filter.accepts(qa.question_type.as_deref()) {
            stats.filtered += 1;
            continue;
        }

        let (answers, answer_spans) = aligner.finish();
        records.push(QaRecord {
            question: tokenizer.encode(&qa.question),
            answers,
            answer_spans,
            context: context.clone(),
            paragraph: paragraph.clone(),
            question_index,
        });
    }

    ParagraphRecords {
        paragraph,
        context,
        records,
        stats,
    }
}

/// Build the sampler pool from a dataset.
///
/// * Every paragraph context is tokenized once and shared by its questions.
/// * Every question's context offsets are indexed, kept or not.
/// * Questions whose type fails the filter are dropped.
/// * If `options.shuffle`, the pool is shuffled with `rng`;
///   then it is capped to `options.instances_per_epoch`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn build_pool<T, R>(
    dataset: SquadDataset,
    tokenizer: &OffsetTokenizer<T>,
    options: &SamplerOptions,
    rng: &mut R,
) -> QaPool<T>
where
    T: TokenType,
    R: Rng + ?Sized,
{
    let filter = options.type_filter();

    let paragraphs: Vec<Arc<SquadParagraph>> = dataset
        .data
        .into_iter()
        .flat_map(|article| article.paragraphs)
        .map(Arc::new)
        .collect();

    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            use rayon::prelude::*;

            let parts: Vec<ParagraphRecords<T>> = paragraphs
                .into_par_iter()
                .map(|p| build_paragraph(p, tokenizer, &filter))
                .collect();
        } else {
            let parts: Vec<ParagraphRecords<T>> = paragraphs
                .into_iter()
                .map(|p| build_paragraph(p, tokenizer, &filter))
                .collect();
        }
    }

    let mut records = Vec::new();
    let mut char_offsets = CharOffsetIndex::default();
    let mut stats = PoolStats::default();

    for part in parts {
        for qa in &part.paragraph.qas {
            char_offsets.insert(qa.id.clone(), part.context.clone());
        }
        records.extend(part.records.into_iter().map(Arc::new));

        stats.paragraphs += part.stats.paragraphs;
        stats.questions += part.stats.questions;
        stats.filtered += part.stats.filtered;
        stats.answers += part.stats.answers;
    }

    if options.shuffle {
        records.shuffle(rng);
    }

    if let Some(cap) = options.instances_per_epoch
        && records.len() > cap
    {
        stats.truncated = records.len() - cap;
        records.truncate(cap);
    }

    log::info!(
        "built pool: {} records from {} questions in {} paragraphs \
         ({} filtered by type, {} over cap); answers: {} aligned, {} duplicate, {} unaligned",
        records.len(),
        stats.questions,
        stats.paragraphs,
        stats.filtered,
        stats.truncated,
        stats.answers.aligned,
        stats.answers.duplicate,
        stats.answers.unaligned,
    );

    QaPool {
        records,
        char_offsets,
        stats,
    }
}
