// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Streams a labeled email corpus through one of the spamsketch classifiers and writes the
//! resulting learning curve.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::bail;
use clap::Parser;
use clap::ValueEnum;
use spamsketch::Classifier;
use spamsketch::ClassifierConfig;
use spamsketch::ClassifierKind;
use spamsketch::DEFAULT_LEARNING_RATE;
use spamsketch::DEFAULT_LG_NUM_BUCKETS;
use spamsketch::DEFAULT_NUM_HASH_ROWS;
use spamsketch::Document;
use spamsketch::corpus::load_documents;
use spamsketch::eval::MetricKind;
use spamsketch::eval::ResultHeader;
use spamsketch::eval::StreamingEvaluator;
use spamsketch::eval::write_results;
use spamsketch::hash::DEFAULT_UPDATE_SEED;
use tracing_subscriber::EnvFilter;

const DEFAULT_SHUFFLE_SEED: u64 = 12;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    NaiveBayesFeatureHashing,
    NaiveBayesCountMin,
    PerceptronFeatureHashing,
    PerceptronCountMin,
}

impl From<ModelArg> for ClassifierKind {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::NaiveBayesFeatureHashing => ClassifierKind::NaiveBayesFeatureHashing,
            ModelArg::NaiveBayesCountMin => ClassifierKind::NaiveBayesCountMin,
            ModelArg::PerceptronFeatureHashing => ClassifierKind::PerceptronFeatureHashing,
            ModelArg::PerceptronCountMin => ClassifierKind::PerceptronCountMin,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MetricArg {
    Accuracy,
    Precision,
    Recall,
    F1,
}

impl From<MetricArg> for MetricKind {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Accuracy => MetricKind::Accuracy,
            MetricArg::Precision => MetricKind::Precision,
            MetricArg::Recall => MetricKind::Recall,
            MetricArg::F1 => MetricKind::F1,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "spamsketch", about = "Test-then-train evaluation of streaming spam classifiers")]
struct Opt {
    /// Number of emails per evaluation window
    #[arg(long)]
    window: usize,

    /// Number of consecutive tokens per feature
    #[arg(long)]
    ngram: usize,

    /// File the learning curve is written to
    #[arg(long)]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = ModelArg::PerceptronFeatureHashing)]
    model: ModelArg,

    #[arg(long, value_enum, default_value_t = MetricArg::Accuracy)]
    metric: MetricArg,

    /// Log2 of the number of hash buckets per table or sketch row
    #[arg(long, default_value_t = DEFAULT_LG_NUM_BUCKETS)]
    log_num_buckets: u8,

    /// Number of Count-Min rows (count-min models only)
    #[arg(long, default_value_t = DEFAULT_NUM_HASH_ROWS)]
    num_hash_rows: usize,

    /// Perceptron learning rate
    #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
    learning_rate: f64,

    /// Override the model's classification threshold
    #[arg(long)]
    threshold: Option<f64>,

    /// Hash seed
    #[arg(long, default_value_t = DEFAULT_UPDATE_SEED)]
    seed: u64,

    /// Seed for shuffling the corpus
    #[arg(long, default_value_t = DEFAULT_SHUFFLE_SEED)]
    shuffle_seed: u64,

    /// Text to classify with the trained model after the run; may be repeated
    #[arg(long)]
    probe: Vec<String>,

    /// Corpus files
    #[arg(required = true)]
    corpus: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let opts = Opt::parse();

    let mut builder = ClassifierConfig::builder()
        .ngram_size(opts.ngram)
        .lg_num_buckets(opts.log_num_buckets)
        .num_hash_rows(opts.num_hash_rows)
        .learning_rate(opts.learning_rate)
        .seed(opts.seed);
    if let Some(threshold) = opts.threshold {
        builder = builder.threshold(threshold);
    }
    let config = builder.build().context("invalid classifier configuration")?;
    let evaluator = StreamingEvaluator::new(opts.window).context("invalid window size")?;

    let kind = ClassifierKind::from(opts.model);
    let metric_kind = MetricKind::from(opts.metric);
    tracing::info!(
        window = opts.window,
        ngram = opts.ngram,
        output = %opts.output.display(),
        model = %kind,
        metric = %metric_kind,
        "starting run"
    );

    let documents = load_documents(opts.corpus.as_slice(), opts.shuffle_seed)?;
    if documents.is_empty() {
        bail!("no documents were loaded from {} corpus file(s)", opts.corpus.len());
    }
    let num_spam = documents.iter().filter(|doc| doc.is_spam()).count();
    tracing::info!(
        documents = documents.len(),
        spam = num_spam,
        spam_percent = 100.0 * num_spam as f64 / documents.len() as f64,
        "corpus loaded"
    );

    let mut model = kind.build(&config);
    let mut metric = metric_kind.build();
    let curve = evaluator.run(&documents, model.as_mut(), metric.as_mut());

    let file = File::create(&opts.output)
        .with_context(|| format!("failed to create {}", opts.output.display()))?;
    let header = ResultHeader {
        window_size: opts.window,
        ngram_size: opts.ngram,
        num_documents: documents.len(),
    };
    write_results(BufWriter::new(file), &header, &curve)?;

    for (i, text) in opts.probe.iter().enumerate() {
        let probe = Document::from_text(false, text);
        let score = model.predict(&probe);
        let label = if model.classify(score) { "spam" } else { "ham" };
        println!("classify(probe{}): soft label={score}, hard label={label}", i + 1);
    }

    Ok(())
}
