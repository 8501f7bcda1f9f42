pub mod budgeting;
pub mod config;

use tracing::debug;

use crate::cache::IdfCache;
use crate::conversation::{Message, Role};
use crate::scoring::{IdfMap, Scorer, TermFrequencyMap, TfIdfScorer};
use crate::types::context_bundle::{ContextBundle, ScoredMessage, SelectionMetadata};
pub use budgeting::{apply_budget, partition, BudgetResult, Partition};
pub use config::{ConfigError, SelectionConfig, DEFAULT_CONTEXT_BUDGET};

pub struct ContextSelector<S = TfIdfScorer> {
	scorer: S,
	config: SelectionConfig,
}

impl Default for ContextSelector<TfIdfScorer> {
	fn default() -> Self {
		Self {
			scorer: TfIdfScorer,
			config: SelectionConfig::default(),
		}
	}
}

impl ContextSelector<TfIdfScorer> {
	/// Selector with the default scorer and a validated configuration.
	pub fn from_config(config: SelectionConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self::new(TfIdfScorer, config))
	}
}

impl<S> ContextSelector<S>
where
	S: Scorer,
{
	pub fn new(scorer: S, config: SelectionConfig) -> Self {
		Self { scorer, config }
	}

	pub fn config(&self) -> &SelectionConfig {
		&self.config
	}

	/// Select with the configured budget.
	pub fn select_default<'a>(&self, conversation: &'a [Message], query: &str) -> ContextBundle<'a> {
		self.select(conversation, query, self.config.budget)
	}

	/// Pick the messages to forward for `query`.
	///
	/// System and starred messages are always kept. At most `budget` regular
	/// messages are kept, chosen by relevance. The output follows conversation
	/// order and may be longer than `budget`.
	pub fn select<'a>(&self, conversation: &'a [Message], query: &str, budget: usize) -> ContextBundle<'a> {
		if conversation.len() <= budget {
			return fast_path(conversation, query, budget);
		}

		// IDF is rebuilt per call; callers wanting reuse go through select_cached.
		let idf = IdfMap::for_regular(conversation);
		self.rank(conversation, query, budget, &idf)
	}

	/// Same as [`select`](Self::select) but reuses the IDF held in `cache`
	/// while the conversation is unchanged.
	pub fn select_cached<'a>(
		&self,
		cache: &mut IdfCache,
		conversation: &'a [Message],
		query: &str,
		budget: usize,
	) -> ContextBundle<'a> {
		if conversation.len() <= budget {
			return fast_path(conversation, query, budget);
		}

		let idf = cache.idf_for(conversation);
		self.rank(conversation, query, budget, idf)
	}

	/// Context for answering the latest message, using it as the query.
	///
	/// Returns `None` unless the conversation ends with a user message; there
	/// is nothing to reply to otherwise.
	pub fn select_for_reply<'a>(&self, conversation: &'a [Message]) -> Option<ContextBundle<'a>> {
		let last = conversation.last()?;
		if last.role != Role::User {
			debug!(role = %last.role, "last message is not from the user; no reply context");
			return None;
		}
		Some(self.select_default(conversation, &last.content))
	}

	fn rank<'a>(
		&self,
		conversation: &'a [Message],
		query: &str,
		budget: usize,
		idf: &IdfMap,
	) -> ContextBundle<'a> {
		// 1. Partition Phase
		let groups = partition(conversation);

		// 2. Scoring Phase
		let query_terms = TermFrequencyMap::from_text(query);
		let mut scored: Vec<ScoredMessage<'a>> = groups
			.regular
			.iter()
			.map(|&index| {
				let message = &conversation[index];
				ScoredMessage {
					index,
					message,
					score: self.scorer.score_terms(&query_terms, message, idf),
				}
			})
			.collect();

		// 3. Ordering Phase
		// Score descending; sort_by is stable so ties keep conversation order.
		scored.sort_by(|a, b| b.score.total_cmp(&a.score));

		debug_assert!(scored.windows(2).all(|w| {
			let a = &w[0];
			let b = &w[1];
			a.score > b.score || (a.score == b.score && a.index < b.index)
		}));

		// 4. Budgeting Phase
		let BudgetResult {
			selected,
			regular_selected,
			regular_excluded_by_budget,
		} = apply_budget(scored, budget);

		// 5. Reassembly Phase
		let mut indices: Vec<usize> = groups
			.system
			.iter()
			.chain(&groups.starred)
			.chain(&selected)
			.copied()
			.collect();
		indices.sort_unstable();

		debug!(
			messages = conversation.len(),
			budget,
			system = groups.system.len(),
			starred = groups.starred.len(),
			regular_selected,
			regular_excluded_by_budget,
			"selected relevant context"
		);

		let metadata = SelectionMetadata {
			query: query.to_string(),
			budget,
			fast_path: false,
			messages_considered: conversation.len(),
			system_included: groups.system.len(),
			starred_included: groups.starred.len(),
			regular_selected,
			regular_excluded_by_budget,
		};

		ContextBundle {
			messages: indices.iter().map(|&i| &conversation[i]).collect(),
			indices,
			selection: metadata,
		}
	}
}

fn fast_path<'a>(conversation: &'a [Message], query: &str, budget: usize) -> ContextBundle<'a> {
	debug!(
		messages = conversation.len(),
		budget,
		"conversation fits budget; forwarding unchanged"
	);

	let groups = partition(conversation);
	let metadata = SelectionMetadata {
		query: query.to_string(),
		budget,
		fast_path: true,
		messages_considered: conversation.len(),
		system_included: groups.system.len(),
		starred_included: groups.starred.len(),
		regular_selected: groups.regular.len(),
		regular_excluded_by_budget: 0,
	};

	ContextBundle {
		messages: conversation.iter().collect(),
		indices: (0..conversation.len()).collect(),
		selection: metadata,
	}
}

/// Select the context to send for `query` with the default scorer.
pub fn select_context<'a>(conversation: &'a [Message], query: &str, budget: usize) -> Vec<&'a Message> {
	ContextSelector::<TfIdfScorer>::default()
		.select(conversation, query, budget)
		.into_messages()
}
