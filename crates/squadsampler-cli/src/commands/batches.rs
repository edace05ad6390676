use std::io::Write;

use serde_json::{Value, json};
use squadsampler::QaRecord;

use crate::{
    LogArgs,
    common::{DatasetArgs, SamplerArgs, VocabArgs},
    input_output::OutputArgs,
};

/// Args for the batches command.
#[derive(clap::Args, Debug)]
pub struct BatchesArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    dataset: DatasetArgs,

    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    sampler: SamplerArgs,

    /// Number of batches to emit.
    #[arg(long, default_value = "1")]
    count: usize,

    /// Include token ids for questions, contexts, and answers.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    tokens: bool,

    #[command(flatten)]
    output: OutputArgs,
}

/// One record as a JSON object.
fn record_json(
    record: &QaRecord<u32>,
    tokens: bool,
) -> Value {
    let answer_texts: Vec<Option<&str>> = record
        .answer_spans()
        .iter()
        .map(|span| record.answer_text(*span))
        .collect();

    let mut value = json!({
        "id": record.id(),
        "question_type": record.question_type(),
        "answer_is_yes": record.answer_is_yes(),
        "answer_spans": record.answer_spans(),
        "answer_texts": answer_texts,
        "context_len": record.context().len(),
    });

    if tokens && let Value::Object(map) = &mut value {
        map.insert("question".to_string(), json!(record.question()));
        map.insert("context".to_string(), json!(record.context()));
        map.insert("answers".to_string(), json!(record.answers()));
    }

    value
}

impl BatchesArgs {
    /// Run the batches command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut sampler = self.sampler.build(&self.dataset, &self.vocab)?;
        if sampler.is_empty() {
            log::warn!("sampler pool is empty; no batches to emit");
            return Ok(());
        }

        let mut writer = self.output.open_writer()?;
        for batch_index in 0..self.count {
            let epoch = sampler.epoch();
            let batch = sampler.get_batch();

            let records: Vec<Value> = batch
                .iter()
                .map(|r| record_json(r, self.tokens))
                .collect();

            let line = json!({
                "batch": batch_index,
                "epoch": epoch,
                "records": records,
            });
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        log::info!(
            "emitted {} batches; now at epoch {}",
            sampler.num_batches(),
            sampler.epoch()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use squadsampler::{QaSampler, QaVocab, SamplerOptions, dataset::SquadDataset};

    use super::*;

    #[test]
    fn test_record_json() {
        let dataset = SquadDataset::from_json_str(
            r#"{"data": [{"paragraphs": [{"context": "The cat sat.", "qas": [
                {"id": "q1", "question": "Who sat?", "question_type": "factoid",
                 "answers": [{"text": "cat", "answer_start": 4}]}
            ]}]}]}"#,
        )
        .unwrap();
        let vocab = Arc::new(QaVocab::<u32>::from_words(["The", "cat", "sat", "."]).unwrap());
        let mut sampler = QaSampler::from_dataset(dataset, vocab, SamplerOptions::new(1)).unwrap();

        let batch = sampler.get_batch();
        let value = record_json(&batch[0], false);
        assert_eq!(value["id"], "q1");
        assert_eq!(value["question_type"], "factoid");
        assert_eq!(value["answer_is_yes"], Value::Null);
        assert_eq!(value["answer_spans"], json!([{"start": 1, "end": 2}]));
        assert_eq!(value["answer_texts"], json!(["cat"]));
        assert_eq!(value["context_len"], 4);
        assert!(value.get("context").is_none());

        let value = record_json(&batch[0], true);
        assert_eq!(value["context"], json!([3, 4, 5, 6]));
        assert_eq!(value["answers"], json!([[4]]));
        assert_eq!(value["question"], json!([0, 5, 0]));
    }
}
