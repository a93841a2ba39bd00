//! Remote move oracle.
//!
//! An external reasoning service is asked for the best move given a FEN and
//! the legal-move list. The oracle is strictly best-effort: any failure (a
//! transport error, a timeout, a malformed payload, or a proposal that is
//! not in the legal list) falls back to a uniformly random legal move, so
//! play continues (possibly with a weaker move) and never stalls.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use game_core::{move_from_san, san_for_move, Color, Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::warn;

/// A service that proposes one move for a position.
///
/// Implementations may fail freely; the caller owns the fallback.
#[async_trait]
pub trait OracleApi: Send + Sync {
    /// Returns the proposed move notation for `fen`, chosen from
    /// `legal_moves`.
    async fn propose_move(&self, fen: &str, legal_moves: &[String]) -> Result<String>;
}

/// Connection settings for [`RemoteOracle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Base URL of the generateContent-style API
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// API key appended to the request
    pub api_key: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: String::new(),
            timeout_ms: 10_000,
        }
    }
}

/// HTTP client for a hosted LLM exposing a `generateContent` endpoint that
/// can answer with an `application/json` body of the form
/// `{"bestMove": "..."}`.
pub struct RemoteOracle {
    client: reqwest::Client,
    config: OracleConfig,
}

impl RemoteOracle {
    pub fn new(config: OracleConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("building oracle HTTP client")?;
        Ok(Self { client, config })
    }

    fn prompt(fen: &str, side: Color, legal_moves: &[String]) -> String {
        let side = match side {
            Color::White => "White",
            Color::Black => "Black",
        };
        format!(
            "You are a Grandmaster Chess Engine playing {side}.\n\
             The current board state (FEN) is: \"{fen}\".\n\
             Your available legal moves are: {moves}.\n\
             Analyze the position deeply. Choose the absolute best move to win.\n\
             Answer with JSON of the form {{\"bestMove\": \"...\"}} where the value \
             is one move string from the available list.",
            moves = json!(legal_moves),
        )
    }
}

#[async_trait]
impl OracleApi for RemoteOracle {
    async fn propose_move(&self, fen: &str, legal_moves: &[String]) -> Result<String> {
        let side = Position::from_fen(fen)
            .map(|pos| pos.side_to_move())
            .unwrap_or(Color::White);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": Self::prompt(fen, side, legal_moves) }] }],
            "generationConfig": { "responseMimeType": "application/json" },
        });

        let response: Value = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("oracle request failed")?
            .error_for_status()
            .context("oracle returned an error status")?
            .json()
            .await
            .context("oracle response was not JSON")?;

        let text = response
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("oracle response carried no candidate text"))?;
        let parsed: Value =
            serde_json::from_str(text).context("oracle candidate text was not JSON")?;
        let best = parsed
            .get("bestMove")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("oracle answer carried no bestMove"))?;

        Ok(best.to_string())
    }
}

/// Asks the oracle for a move and validates the answer.
///
/// Returns `None` only when the position has no legal moves. Every failure
/// path degrades to a uniformly random legal move; the fallback is
/// mandatory, not optional.
pub async fn choose_move(
    oracle: &dyn OracleApi,
    pos: &Position,
    rng: &mut (impl Rng + Send),
) -> Option<Move> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return None;
    }

    let notations: Vec<String> = moves.iter().map(|&mv| san_for_move(pos, mv)).collect();

    match oracle.propose_move(&pos.fen(), &notations).await {
        Ok(proposal) => {
            if let Some(mv) = move_from_san(pos, &proposal) {
                return Some(mv);
            }
            warn!(%proposal, "oracle proposed a move outside the legal list, falling back");
        }
        Err(err) => warn!(error = %err, "oracle failed, falling back"),
    }

    moves.choose(rng).copied()
}
