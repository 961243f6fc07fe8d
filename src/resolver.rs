//! Rule-Based Response Resolver
//!
//! Maps a free-text utterance to one canned reply by scanning an ordered
//! table of (keyword-set, reply) rules. First match wins: the table order is
//! an implicit priority list and is part of the contract, so overlapping
//! keyword sets are legal and resolved purely by position.
//!
//! Matching is substring containment on the normalized utterance, not
//! tokenized word matching; a keyword embedded inside a longer word counts.
//! Every call is independent (no dialogue state) and total (the fallback
//! reply covers the no-match case, including the empty utterance).

use smallvec::SmallVec;
use tracing::trace;

use crate::utils::normalize::normalize_utterance;

/// One ordered dispatch entry: reply with `reply` when the utterance
/// contains any of `keywords`.
#[derive(Debug, Clone)]
pub struct ResponseRule {
    /// Trigger keywords, stored lowercase. Sets are small (storyboard max 4).
    pub keywords: SmallVec<[String; 4]>,
    /// Canned reply returned on a hit.
    pub reply: String,
}

impl ResponseRule {
    /// Build a rule, lowercasing keywords so they match normalized input.
    pub fn new<I, S>(keywords: I, reply: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ResponseRule {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            reply: reply.to_string(),
        }
    }

    /// Does the normalized utterance contain any of this rule's keywords?
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// Ordered rule table plus the fixed fallback reply.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ResponseRule>,
    fallback: String,
}

// ============================================================================
// STORYBOARD RULE TABLE
// Branch order carried verbatim from the prototype chatbot: greeting is
// checked before domain keywords, so a message containing both resolves to
// the greeting.
// ============================================================================

static STORYBOARD_RULES: &[(&[&str], &str)] = &[
    (&["안녕", "hi"], "안녕하세요! 무엇을 도와드릴까요?"),
    (
        &["날씨"],
        "'작물 추천' 화면을 확인해 주세요. 더 자세한 정보가 필요하신가요?",
    ),
    (
        &["병충해", "진단"],
        "'작물 진단' 화면에 사진을 올려주시면 상태를 진단해 드릴 수 있습니다.",
    ),
    (
        &["재배", "가이드"],
        "재배 가이드는 '재배 가이드' 화면에서 선택한 작물에 맞춰 제공됩니다.",
    ),
    (
        &["고마워", "감사"],
        "천만에요! 더 궁금한 점이 있으시면 언제든지 물어보세요.",
    ),
    (
        &["화분", "물", "흙", "주기"],
        "'내 농장' 화면에서 등록된 작물을 선택하시면 관련 정보를 확인하실 수 있습니다.",
    ),
];

static STORYBOARD_FALLBACK: &str =
    "질문을 정확히 이해하지 못했습니다. 좀 더 구체적으로 말씀해 주시거나, 다른 화면의 기능을 이용해 보세요.";

impl RuleSet {
    /// Build a rule set from an ordered rule list and a fallback reply.
    pub fn new<I>(rules: I, fallback: &str) -> Self
    where
        I: IntoIterator<Item = ResponseRule>,
    {
        RuleSet {
            rules: rules.into_iter().collect(),
            fallback: fallback.to_string(),
        }
    }

    /// The built-in storyboard rule table.
    pub fn storyboard() -> Self {
        Self::new(
            STORYBOARD_RULES
                .iter()
                .map(|&(keywords, reply)| ResponseRule::new(keywords.iter().copied(), reply)),
            STORYBOARD_FALLBACK,
        )
    }

    /// Resolve an utterance to a reply. Total: never fails for any input.
    pub fn resolve(&self, utterance: &str) -> &str {
        let normalized = normalize_utterance(utterance);

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.matches(&normalized) {
                trace!(rule = index, "matched response rule");
                return &rule.reply;
            }
        }

        trace!("no rule matched, using fallback");
        &self.fallback
    }

    /// The no-match reply.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Rules in evaluation order (for inspection and tests).
    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::storyboard()
    }
}
