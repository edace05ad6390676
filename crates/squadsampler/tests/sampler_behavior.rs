#![allow(missing_docs)]

use std::{fs, sync::Arc};

use squadsampler::{
    QaSampler,
    QaVocab,
    SamplerOptions,
    alignment::AnswerSpan,
    dataset::SquadDataset,
    vocab::save_vocab_path,
};
use tempdir::TempDir;

fn vocab() -> Arc<QaVocab<u32>> {
    Arc::new(QaVocab::from_words(["The", "cat", "sat", ".", "Who", "?"]).unwrap())
}

/// A dataset of `n` untyped questions over a shared context.
fn numbered_dataset(n: usize) -> String {
    let qas = (0..n)
        .map(|i| {
            format!(
                r#"{{"id": "q{i}", "question": "Who sat {i}?",
                    "answers": [{{"text": "cat", "answer_start": 4}}]}}"#
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"version": "1.1", "data": [{{"title": "t", "paragraphs": [{{"context": "The cat sat.", "qas": [{qas}]}}]}}]}}"#)
}

fn sampler(
    n: usize,
    options: SamplerOptions,
) -> QaSampler<u32> {
    let dataset = SquadDataset::from_json_str(&numbered_dataset(n)).unwrap();
    QaSampler::from_dataset(dataset, vocab(), options).unwrap()
}

fn batch_ids(sampler: &mut QaSampler<u32>) -> Vec<String> {
    sampler
        .get_batch()
        .iter()
        .map(|r| r.id().to_string())
        .collect()
}

#[test]
fn test_answer_mapping_and_dedup() {
    let json = r#"{"data": [{"paragraphs": [{"context": "The cat sat.", "qas": [
        {"id": "a", "question": "Who sat?", "question_type": "factoid", "answers": [
            {"text": "cat", "answer_start": 4},
            {"text": "cat", "answer_start": 4},
            {"text": "at", "answer_start": 5}
        ]}
    ]}]}]}"#;
    let dataset = SquadDataset::from_json_str(json).unwrap();
    let mut sampler = QaSampler::from_dataset(dataset, vocab(), SamplerOptions::new(1)).unwrap();

    assert_eq!(sampler.char_offsets().get("a"), Some(&[0, 4, 8, 11][..]));

    let batch = sampler.get_batch();
    assert_eq!(batch.len(), 1);

    let record = &batch[0];
    assert_eq!(record.answer_spans(), &[AnswerSpan::new(1, 2)]);
    assert_eq!(record.answers().len(), 1);
    assert_eq!(record.answer_text(AnswerSpan::new(1, 2)), Some("cat"));

    let stats = sampler.stats().answers;
    assert_eq!(stats.aligned, 1);
    assert_eq!(stats.duplicate, 1);
    assert_eq!(stats.unaligned, 1);
}

#[test]
fn test_batch_sequence_over_ten() {
    let mut s = sampler(10, SamplerOptions::new(4));

    let mut observed = Vec::new();
    for _ in 0..4 {
        let size = s.get_batch().len();
        observed.push((size, s.epoch()));
    }
    assert_eq!(observed, vec![(4, 0), (4, 0), (2, 1), (4, 1)]);
}

#[test]
fn test_same_seed_same_sequence() {
    let options = SamplerOptions::new(4).with_seed(7);
    let mut a = sampler(10, options.clone());
    let mut b = sampler(10, options);

    // spans three epoch boundaries.
    for _ in 0..10 {
        assert_eq!(batch_ids(&mut a), batch_ids(&mut b));
    }
    assert_eq!(a.epoch(), 3);
    assert_eq!(a.epoch(), b.epoch());
}

#[test]
fn test_reset_replays_without_reshuffle() {
    let mut s = sampler(10, SamplerOptions::new(4));
    let order: Vec<String> = s.records().iter().map(|r| r.id().to_string()).collect();

    let first = batch_ids(&mut s);
    assert_eq!(first, order[..4]);

    s.reset();
    assert_eq!(s.epoch(), 0);
    assert_eq!(batch_ids(&mut s), first);

    let after: Vec<String> = s.records().iter().map(|r| r.id().to_string()).collect();
    assert_eq!(after, order);
}

#[test]
fn test_from_dir_concatenates_files() {
    let dir = TempDir::new("squadsampler_test").unwrap();
    fs::write(dir.path().join("a.json"), numbered_dataset(3)).unwrap();
    fs::write(
        dir.path().join("b.json"),
        numbered_dataset(2).replace(r#""id": "q"#, r#""id": "b"#),
    )
    .unwrap();

    let vocab_path = dir.path().join("vocab.json");
    save_vocab_path(vocab().as_ref(), &vocab_path).unwrap();
    let vocab = Arc::new(squadsampler::vocab::load_vocab_path::<u32, _>(&vocab_path).unwrap());

    let options = SamplerOptions::new(5).with_shuffle(false);
    let mut s = QaSampler::from_dir(dir.path(), &["a.json", "b.json"], vocab, options).unwrap();

    assert_eq!(s.len(), 5);
    assert_eq!(batch_ids(&mut s), vec!["q0", "q1", "q2", "b0", "b1"]);
    assert_eq!(s.char_offsets().len(), 5);
}

#[test]
fn test_options_from_json() {
    let options = SamplerOptions::from_json_str(
        r#"{"batch_size": 2, "instances_per_epoch": 3, "question_types": ["list"]}"#,
    )
    .unwrap();
    let mut s = sampler(10, options);

    assert_eq!(s.len(), 3);
    assert_eq!(s.stats().truncated, 7);
    assert_eq!(s.batches_per_epoch(), 2);
    assert_eq!(s.get_batch().len(), 2);
    assert_eq!(s.get_batch().len(), 1);
    assert_eq!(s.epoch(), 1);
}
