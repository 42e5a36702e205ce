//! Stateful menu-driven session engine.

use uuid::Uuid;

use pb_knowledge::{FALLBACK_ANSWER, plot_details, plot_not_found};
use pb_protocol::ChatMessage;

use crate::source::{AnswerSource, SourceResult};
use crate::state::SessionState;

/// Label of the built-in plot-lookup entry on the main menu.
pub const PLOT_LOOKUP_LABEL: &str = "Plot Status Lookup (Enter Plot Number)";

/// Reserved key for the go-back option on sub-menus.
pub const BACK_KEY: &str = "back";

const BACK_LABEL: &str = "Go Back to Main Menu";

const GREETING: &str =
    "Hello! I am PlotBot, your assistant. Please select a category below to get started.";
const PLOT_PROMPT: &str = "Please enter the plot number (e.g., 101, 115) and press Enter.";
const ANSWER_FOLLOWUP: &str = "Answer provided. Please choose a new category from the main menu.";
const PLOT_FOLLOWUP: &str = "Plot details provided. Please select a new action from the menu.";
const UNKNOWN_OPTION: &str = "That option is not on the menu. Please pick one of the listed options.";

/// One selectable button: a short key ("1", "2", ..., "back") and the
/// label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub key: String,
    pub label: String,
}

impl MenuOption {
    fn numbered(index: usize, label: impl Into<String>) -> Self {
        Self {
            key: (index + 1).to_string(),
            label: label.into(),
        }
    }

    fn matches(&self, input: &str) -> bool {
        self.key == input || self.label == input
    }
}

/// One user's navigation state plus chat transcript.
///
/// The machine starts at the main menu and always returns there after an
/// answer or a plot lookup; from the free-text state, any non-empty
/// input leads back to the main menu whether or not the plot exists.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    state: SessionState,
    transcript: Vec<ChatMessage>,
}

impl Session {
    /// Open a session at the main menu with the assistant greeting.
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            state: SessionState::Main,
            transcript: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Buttons to offer for the current state. Empty while free-text
    /// input is expected.
    pub async fn options(&self, source: &dyn AnswerSource) -> SourceResult<Vec<MenuOption>> {
        match &self.state {
            SessionState::Main => {
                let mut options = vec![MenuOption::numbered(0, PLOT_LOOKUP_LABEL)];
                for (i, subject) in source.subjects().await?.into_iter().enumerate() {
                    options.push(MenuOption::numbered(i + 1, subject));
                }
                Ok(options)
            }
            SessionState::SubjectSelected(subject) => {
                let questions = source.questions(subject).await?.unwrap_or_default();
                let mut options: Vec<MenuOption> = questions
                    .into_iter()
                    .enumerate()
                    .map(|(i, q)| MenuOption::numbered(i, q))
                    .collect();
                options.push(MenuOption {
                    key: BACK_KEY.into(),
                    label: BACK_LABEL.into(),
                });
                Ok(options)
            }
            SessionState::AwaitingPlotNumber => Ok(Vec::new()),
        }
    }

    /// Feed one user input (a button key, a button label, or free text)
    /// and return the transcript messages this step appended.
    ///
    /// Lookups run before any state or transcript mutation, so a source
    /// failure leaves the session exactly where it was.
    pub async fn select(
        &mut self,
        source: &dyn AnswerSource,
        input: &str,
    ) -> SourceResult<Vec<ChatMessage>> {
        let input = input.trim();
        let before = self.transcript.len();

        match self.state.clone() {
            SessionState::Main => {
                if input.is_empty() {
                    return Ok(Vec::new());
                }
                let options = self.options(source).await?;
                match options.iter().find(|o| o.matches(input)) {
                    Some(option) if option.label == PLOT_LOOKUP_LABEL => {
                        self.push_user(format!("Selected: {PLOT_LOOKUP_LABEL}"));
                        self.push_assistant(PLOT_PROMPT);
                        self.state = SessionState::AwaitingPlotNumber;
                    }
                    Some(option) => {
                        self.push_user(format!("Selected: {}", option.label));
                        self.state = SessionState::SubjectSelected(option.label.clone());
                    }
                    None => {
                        self.push_assistant(UNKNOWN_OPTION);
                    }
                }
            }
            SessionState::SubjectSelected(_) => {
                if input.is_empty() {
                    return Ok(Vec::new());
                }
                let options = self.options(source).await?;
                match options.iter().find(|o| o.matches(input)) {
                    Some(option) if option.key == BACK_KEY => {
                        self.push_user(format!("Selected: {BACK_LABEL}"));
                        self.state = SessionState::Main;
                    }
                    Some(option) => {
                        let question = option.label.clone();
                        let answer = source
                            .answer(&question)
                            .await?
                            .unwrap_or_else(|| FALLBACK_ANSWER.to_string());
                        self.push_user(format!("Selected: {question}"));
                        self.push_assistant(format!("Question: {question}\nAnswer: {answer}"));
                        self.push_assistant(ANSWER_FOLLOWUP);
                        self.state = SessionState::Main;
                    }
                    None => {
                        self.push_assistant(UNKNOWN_OPTION);
                    }
                }
            }
            SessionState::AwaitingPlotNumber => {
                // Empty input keeps the machine waiting; anything else
                // resolves and returns to the main menu.
                if input.is_empty() {
                    return Ok(Vec::new());
                }
                let reply = match source.plot(input).await? {
                    Some(plot) => plot_details(&plot),
                    None => plot_not_found(input),
                };
                self.push_user(format!("Plot number entered: {input}"));
                self.push_assistant(reply);
                self.push_assistant(PLOT_FOLLOWUP);
                self.state = SessionState::Main;
            }
        }

        Ok(self.transcript[before..].to_vec())
    }

    fn push_user(&mut self, content: impl Into<String>) {
        self.transcript.push(ChatMessage::user(content));
    }

    fn push_assistant(&mut self, content: impl Into<String>) {
        self.transcript.push(ChatMessage::assistant(content));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{LocalSource, SourceError};
    use async_trait::async_trait;
    use pb_knowledge::{KnowledgeBase, PlotRegistry};
    use pb_protocol::{ChatRole, PlotRecord};

    /// Source that fails every call, for exercising error handling.
    struct FailingSource;

    #[async_trait]
    impl AnswerSource for FailingSource {
        async fn subjects(&self) -> SourceResult<Vec<String>> {
            Err(SourceError::Unavailable("connection refused".into()))
        }
        async fn questions(&self, _subject: &str) -> SourceResult<Option<Vec<String>>> {
            Err(SourceError::Unavailable("connection refused".into()))
        }
        async fn answer(&self, _question: &str) -> SourceResult<Option<String>> {
            Err(SourceError::Unavailable("connection refused".into()))
        }
        async fn plot(&self, _number: &str) -> SourceResult<Option<PlotRecord>> {
            Err(SourceError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn new_session_greets_at_main_menu() {
        let session = Session::new();
        assert_eq!(session.state(), &SessionState::Main);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, ChatRole::Assistant);
        assert!(session.transcript()[0].content.contains("PlotBot"));
    }

    #[tokio::test]
    async fn main_menu_lists_plot_lookup_then_subjects() {
        let source = LocalSource::with_sample_data();
        let session = Session::new();
        let options = session.options(&source).await.unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].key, "1");
        assert_eq!(options[0].label, PLOT_LOOKUP_LABEL);
        assert_eq!(options[1].label, "Legal & Financing Questions");
        assert_eq!(options[2].label, "General Project & Amenities");
    }

    #[tokio::test]
    async fn fixed_answer_flow_returns_to_main() {
        let source = LocalSource::with_sample_data();
        let mut session = Session::new();

        session.select(&source, "2").await.unwrap();
        assert_eq!(
            session.state(),
            &SessionState::SubjectSelected("Legal & Financing Questions".into())
        );

        let options = session.options(&source).await.unwrap();
        assert_eq!(options.len(), 4); // 3 questions + back
        assert_eq!(options[3].key, BACK_KEY);

        let appended = session.select(&source, "2").await.unwrap();
        assert_eq!(session.state(), &SessionState::Main);
        assert_eq!(appended.len(), 3);
        assert_eq!(appended[0].role, ChatRole::User);
        assert!(appended[1].content.contains("HDFC"));
        assert!(appended[2].content.contains("choose a new category"));
    }

    #[tokio::test]
    async fn question_selection_by_label_works() {
        let source = LocalSource::with_sample_data();
        let mut session = Session::new();
        session
            .select(&source, "General Project & Amenities")
            .await
            .unwrap();
        let appended = session
            .select(&source, "What is the expected possession date?")
            .await
            .unwrap();
        assert!(appended[1].content.contains("Q4 2026"));
        assert_eq!(session.state(), &SessionState::Main);
    }

    /// Source whose menu offers a question its answer table cannot
    /// resolve, to drive the fallback path.
    struct StaleMenuSource;

    #[async_trait]
    impl AnswerSource for StaleMenuSource {
        async fn subjects(&self) -> SourceResult<Vec<String>> {
            Ok(vec!["Legal".into()])
        }
        async fn questions(&self, _subject: &str) -> SourceResult<Option<Vec<String>>> {
            Ok(Some(vec!["Is it registered?".into()]))
        }
        async fn answer(&self, _question: &str) -> SourceResult<Option<String>> {
            Ok(None)
        }
        async fn plot(&self, _number: &str) -> SourceResult<Option<PlotRecord>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn unanswerable_question_gets_fallback_answer() {
        let mut session = Session::new();
        session.select(&StaleMenuSource, "Legal").await.unwrap();
        let appended = session.select(&StaleMenuSource, "1").await.unwrap();
        assert!(
            appended[1]
                .content
                .contains("could not find a specific answer")
        );
        assert_eq!(session.state(), &SessionState::Main);
    }

    #[tokio::test]
    async fn plot_flow_known_number() {
        let source = LocalSource::with_sample_data();
        let mut session = Session::new();

        session.select(&source, "1").await.unwrap();
        assert_eq!(session.state(), &SessionState::AwaitingPlotNumber);
        assert!(session.options(&source).await.unwrap().is_empty());

        let appended = session.select(&source, "101").await.unwrap();
        assert_eq!(session.state(), &SessionState::Main);
        assert!(appended[1].content.contains("SOLD"));
        assert!(appended[1].content.contains("1200 sq. ft."));
    }

    #[tokio::test]
    async fn plot_flow_unknown_number_still_returns_to_main() {
        let source = LocalSource::with_sample_data();
        let mut session = Session::new();
        session.select(&source, "1").await.unwrap();

        let appended = session.select(&source, "999").await.unwrap();
        assert_eq!(session.state(), &SessionState::Main);
        assert!(appended[1].content.contains("Plot 999 not found"));
    }

    #[tokio::test]
    async fn empty_input_keeps_waiting_for_plot_number() {
        let source = LocalSource::with_sample_data();
        let mut session = Session::new();
        session.select(&source, "1").await.unwrap();

        let appended = session.select(&source, "   ").await.unwrap();
        assert!(appended.is_empty());
        assert_eq!(session.state(), &SessionState::AwaitingPlotNumber);
    }

    #[tokio::test]
    async fn go_back_returns_to_main_menu() {
        let source = LocalSource::with_sample_data();
        let mut session = Session::new();
        session.select(&source, "3").await.unwrap();
        assert!(matches!(session.state(), SessionState::SubjectSelected(_)));

        session.select(&source, BACK_KEY).await.unwrap();
        assert_eq!(session.state(), &SessionState::Main);
    }

    #[tokio::test]
    async fn unknown_option_leaves_state_unchanged() {
        let source = LocalSource::with_sample_data();
        let mut session = Session::new();

        let appended = session.select(&source, "42").await.unwrap();
        assert_eq!(session.state(), &SessionState::Main);
        assert_eq!(appended.len(), 1);
        assert!(appended[0].content.contains("not on the menu"));
    }

    #[tokio::test]
    async fn empty_knowledge_still_offers_plot_lookup() {
        let source = LocalSource::new(KnowledgeBase::empty(), PlotRegistry::with_sample_plots());
        let mut session = Session::new();

        let options = session.options(&source).await.unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, PLOT_LOOKUP_LABEL);

        session.select(&source, "1").await.unwrap();
        let appended = session.select(&source, "105").await.unwrap();
        assert!(appended[1].content.contains("AVAILABLE"));
    }

    #[tokio::test]
    async fn source_failure_leaves_session_untouched() {
        let mut session = Session::new();
        let transcript_len = session.transcript().len();

        let result = session.select(&FailingSource, "1").await;
        assert!(result.is_err());
        assert_eq!(session.state(), &SessionState::Main);
        assert_eq!(session.transcript().len(), transcript_len);
    }
}
