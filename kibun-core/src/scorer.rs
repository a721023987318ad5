//! Heuristic valence scoring
//!
//! Walks a token sequence, looks up base valences in the lexicon, and
//! applies contextual heuristics: negation, booster/dampener scaling,
//! ALL-CAPS emphasis, trailing `!`/`?` emphasis, and clause
//! reweighting around contrast words.

use crate::lexicon::Lexicon;
use crate::tokenizer::Token;

/// How many preceding tokens are inspected for negators and boosters
pub const CONTEXT_WINDOW: usize = 3;

/// Magnitude delta contributed by a booster word at distance 1
pub const BOOSTER_DELTA: f64 = 0.293;

/// Magnitude delta contributed by a dampener word at distance 1
pub const DAMPENER_DELTA: f64 = -0.293;

/// Booster/dampener influence decay at window distances 2 and 3
const DISTANCE_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Sign-flip-and-dampen factor applied by a negator in the window
pub const NEGATION_FACTOR: f64 = -0.74;

/// Emphasis delta for ALL-CAPS tokens in mixed-case text
pub const CAPS_DELTA: f64 = 0.733;

/// Emphasis bonus per trailing `!`, counted up to four
pub const EXCLAIM_DELTA: f64 = 0.292;
const EXCLAIM_CAP: usize = 4;

/// Emphasis bonus per `?` in runs of two or three
pub const QUESTION_DELTA: f64 = 0.18;
/// Flat emphasis bonus for runs of four or more `?`
pub const QUESTION_CAP_BONUS: f64 = 0.96;

/// Weight applied to valences before a contrast word
pub const CONTRAST_BEFORE: f64 = 0.5;
/// Weight applied to valences after a contrast word
pub const CONTRAST_AFTER: f64 = 1.5;

/// Raw per-call score sums
///
/// Mutated only within a single analysis call; never shared across
/// calls or threads. `positive_sum` and `negative_sum` carry signed
/// valence totals, `neutral_count` counts words with no (or zero)
/// lexicon valence. Emphasis punctuation tokens are modifiers, not
/// content, and count toward neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreAccumulator {
    /// Sum of positive token valences (>= 0)
    pub positive_sum: f64,
    /// Sum of negative token valences (<= 0)
    pub negative_sum: f64,
    /// Count of word tokens with zero valence
    pub neutral_count: usize,
}

/// Heuristic scorer over a borrowed lexicon
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Scorer<'a> {
    /// Create a scorer backed by the given lexicon
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score a token sequence into raw valence sums
    pub fn score(&self, tokens: &[Token]) -> ScoreAccumulator {
        let mut valences = self.token_valences(tokens);
        self.apply_contrast(tokens, &mut valences);
        self.apply_emphasis_runs(tokens, &mut valences);

        let mut acc = ScoreAccumulator::default();
        for (token, &valence) in tokens.iter().zip(&valences) {
            if token.is_emphasis() {
                continue;
            }
            if valence > 0.0 {
                acc.positive_sum += valence;
            } else if valence < 0.0 {
                acc.negative_sum += valence;
            } else {
                acc.neutral_count += 1;
            }
        }
        acc
    }

    /// Compute the context-adjusted valence of each token
    fn token_valences(&self, tokens: &[Token]) -> Vec<f64> {
        let mixed_case = has_caps_differential(tokens);
        let max = self.lexicon.max_valence();

        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if token.is_emphasis() {
                    return 0.0;
                }
                let Some(mut valence) = self.lexicon.lookup(&token.normalized) else {
                    return 0.0;
                };

                if token.is_all_caps() && mixed_case {
                    valence += CAPS_DELTA.copysign(valence);
                }

                valence = self.apply_window(tokens, i, valence);
                valence.clamp(-max, max)
            })
            .collect()
    }

    /// Apply negators and boosters found in the lookback window
    fn apply_window(&self, tokens: &[Token], index: usize, mut valence: f64) -> f64 {
        for distance in 1..=CONTEXT_WINDOW {
            // Window lookback must not run past the sequence start.
            let Some(j) = index.checked_sub(distance) else {
                break;
            };
            let prev = &tokens[j];

            // A sentiment-bearing word in the window is scored on its
            // own; it does not also modify its neighbors.
            if self.lexicon.lookup(&prev.normalized).is_some() {
                continue;
            }

            if self.lexicon.is_negator(&prev.normalized) {
                valence *= NEGATION_FACTOR;
            } else if self.lexicon.is_booster(&prev.normalized) {
                valence += scaled_delta(BOOSTER_DELTA, distance).copysign(valence);
            } else if self.lexicon.is_dampener(&prev.normalized) {
                // Dampening shrinks magnitude toward zero, never past it.
                let delta = scaled_delta(DAMPENER_DELTA, distance);
                let shrunk = valence.abs() + delta;
                valence = shrunk.max(0.0).copysign(valence);
            }
        }
        valence
    }

    /// Reweight clauses around the first contrast word
    fn apply_contrast(&self, tokens: &[Token], valences: &mut [f64]) {
        let Some(pivot) = tokens
            .iter()
            .position(|t| self.lexicon.is_contrast(&t.normalized))
        else {
            return;
        };

        for (i, valence) in valences.iter_mut().enumerate() {
            if i < pivot {
                *valence *= CONTRAST_BEFORE;
            } else if i > pivot {
                *valence *= CONTRAST_AFTER;
            }
        }
    }

    /// Add the trailing-punctuation bonus to the nearest scored token
    fn apply_emphasis_runs(&self, tokens: &[Token], valences: &mut [f64]) {
        let max = self.lexicon.max_valence();

        for (i, token) in tokens.iter().enumerate() {
            if !token.is_emphasis() {
                continue;
            }
            let bonus = emphasis_bonus(&token.text);
            if bonus == 0.0 {
                continue;
            }

            // The bonus amplifies the nearest preceding scored token.
            let Some(target) = valences[..i].iter().rposition(|&v| v != 0.0) else {
                continue;
            };
            let amplified = valences[target] + bonus.copysign(valences[target]);
            valences[target] = amplified.clamp(-max, max);
        }
    }
}

/// Bounded bonus for one run of emphasis punctuation
fn emphasis_bonus(run: &str) -> f64 {
    let exclaims = run.chars().filter(|&c| c == '!').count();
    let questions = run.chars().filter(|&c| c == '?').count();

    let exclaim_bonus = exclaims.min(EXCLAIM_CAP) as f64 * EXCLAIM_DELTA;
    let question_bonus = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_DELTA,
        _ => QUESTION_CAP_BONUS,
    };
    exclaim_bonus + question_bonus
}

/// Booster/dampener delta scaled by distance within the window
fn scaled_delta(delta: f64, distance: usize) -> f64 {
    delta * DISTANCE_DECAY[distance - 1]
}

/// ALL-CAPS is only emphatic when the text mixes cases
///
/// A fully uppercased text (e.g. shouting throughout, or a terminal
/// that uppercases everything) carries no per-word emphasis signal.
fn has_caps_differential(tokens: &[Token]) -> bool {
    let mut caps = 0usize;
    let mut words = 0usize;
    for token in tokens {
        if token.is_word() {
            words += 1;
            if token.is_all_caps() {
                caps += 1;
            }
        }
    }
    caps > 0 && caps < words
}
