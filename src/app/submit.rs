// Submission workflow for both input modes.
// - Validates the entry field and rejects concurrent parse jobs.
// - Tree mode parses locally; human mode parses on a background thread.
// - Folds parse and permutation failures into the status line.
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use crate::{corenlp, model::InputMode, permute, syntax::SyntaxTree};

use super::{App, ParseOutcome, RunningParse};

const INCORRECT_SENTENCE_MESSAGE: &str = "You provided an incorrect sentence";

impl App {
    pub fn submit(&mut self) {
        if self.running_parse.is_some() {
            self.status_message = "A parse is already running. Wait for it to finish.".to_string();
            return;
        }

        let sentence = self.sentence.trim().to_string();
        if sentence.is_empty() {
            self.status_message = "Enter a sentence before submitting.".to_string();
            return;
        }

        match self.mode {
            InputMode::Tree => self.apply_tree_text(&sentence),
            InputMode::Human => self.start_parse_job(sentence),
        }
    }

    fn start_parse_job(&mut self, sentence: String) {
        let endpoint = self.parse_config().parse_endpoint.clone();
        let timeout = self.parse_config().request_timeout();
        tracing::debug!(%endpoint, "submitting sentence for remote parse");

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outcome = match corenlp::fetch_parse(&endpoint, &sentence, timeout) {
                Ok(parse) => ParseOutcome::Parsed(parse),
                Err(err) => ParseOutcome::Failed(err.to_string()),
            };
            let _ = tx.send(outcome);
        });

        self.parse_spinner_frame = 0;
        self.running_parse = Some(RunningParse { rx });
        self.status_message = "Parsing sentence...".to_string();
    }

    pub(super) fn pump_running_parse(&mut self) {
        let Some(running) = self.running_parse.as_ref() else {
            return;
        };

        let outcome = match running.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                ParseOutcome::Failed("parse worker exited unexpectedly".to_string())
            }
        };

        self.running_parse = None;
        match outcome {
            ParseOutcome::Parsed(parse) => self.apply_tree_text(&parse),
            ParseOutcome::Failed(cause) => {
                tracing::warn!(%cause, "remote parse failed");
                self.status_message = INCORRECT_SENTENCE_MESSAGE.to_string();
            }
        }
    }

    fn apply_tree_text(&mut self, text: &str) {
        let tree = match SyntaxTree::parse(text) {
            Ok(tree) => tree,
            Err(err) => {
                tracing::warn!(error = %err, "sentence rejected");
                self.status_message = INCORRECT_SENTENCE_MESSAGE.to_string();
                return;
            }
        };

        let results = permute::permuted_sentences(&tree);
        if results.truncated {
            tracing::warn!(count = results.len(), "permutation generation capped");
            self.status_message = format!(
                "{} permutations generated (capped at {}).",
                results.len(),
                permute::MAX_PERMUTATIONS
            );
        } else {
            self.status_message = format!("{} permutations generated.", results.len());
        }
        self.store_results(tree, results);
    }
}
