use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::components::radar_chart::RadarData;
use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::messages::{Command, FeedbackRequest, Message};
use crate::models::{
    AiFeedbackResponse, AnswerCreate, CompetencyResult, QuestionWithAnswer, RegisterRequest,
    User, UserCareerPlan, UserCareerPlanCreate,
};
use crate::storage::Route;

// ---------------------------------------------------------------------------
// Auth forms
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthFormState {
    pub is_submitting: bool,
    pub error: Option<String>,
}

/// Raw values of the sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub department: String,
    pub position: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, String> {
        let email = self.email.trim();
        let name = self.name.trim();
        if email.is_empty() || name.is_empty() {
            return Err("Email and name are required.".to_string());
        }
        if self.password.is_empty() {
            return Err("Please enter a password.".to_string());
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match.".to_string());
        }

        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Ok(RegisterRequest {
            email: email.to_string(),
            password: self.password.clone(),
            name: name.to_string(),
            department: optional(&self.department),
            position: optional(&self.position),
        })
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// One-question-at-a-time walk through the questionnaire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluationState {
    pub questions: Vec<QuestionWithAnswer>,
    pub answers: BTreeMap<u32, u8>,
    pub current_index: usize,
    pub is_loading: bool,
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl EvaluationState {
    /// Replace the question list, pre-filling answers the user gave before.
    pub fn load(&mut self, questions: Vec<QuestionWithAnswer>) {
        self.answers = questions
            .iter()
            .filter_map(|q| q.user_answer.map(|score| (q.id(), score)))
            .collect();
        self.questions = questions;
        self.current_index = 0;
        self.is_loading = false;
        self.error = None;
    }

    pub fn current_question(&self) -> Option<&QuestionWithAnswer> {
        self.questions.get(self.current_index)
    }

    pub fn current_answer(&self) -> Option<u8> {
        self.current_question()
            .and_then(|q| self.answers.get(&q.id()).copied())
    }

    /// Record a score. Out-of-range scores and unknown questions are ignored;
    /// returns whether the answer was stored.
    pub fn select_answer(&mut self, question_id: u32, score: u8) -> bool {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return false;
        }
        if !self.questions.iter().any(|q| q.id() == question_id) {
            return false;
        }
        self.answers.insert(question_id, score);
        true
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.current_index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.answers.contains_key(&q.id()))
            .count()
    }

    pub fn can_submit(&self) -> bool {
        !self.questions.is_empty()
            && self.answered_count() == self.questions.len()
            && !self.is_submitting
    }

    /// Payload for `POST /answers/`, ordered by question id.
    pub fn submission(&self) -> Vec<AnswerCreate> {
        self.answers
            .iter()
            .map(|(&question_id, &score)| AnswerCreate { question_id, score })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub results: Option<CompetencyResult>,
    pub feedback: Option<AiFeedbackResponse>,
    pub is_loading: bool,
    /// The regenerating feedback request still in flight, if any. Cache
    /// lookups never occupy this slot.
    pub pending_feedback: Option<FeedbackRequest>,
    pub error: Option<String>,
    pub feedback_error: Option<String>,
}

impl DashboardState {
    pub fn is_loading_feedback(&self) -> bool {
        self.pending_feedback.is_some()
    }

    pub fn has_evaluation(&self) -> bool {
        self.competency_count() > 0
    }

    pub fn competency_count(&self) -> usize {
        self.results
            .as_ref()
            .map(|r| r.user_competencies.len())
            .unwrap_or(0)
    }

    pub fn average_score(&self) -> f64 {
        match &self.results {
            Some(r) if !r.user_competencies.is_empty() => {
                let total: f64 = r.user_competencies.iter().map(|c| c.score).sum();
                total / r.user_competencies.len() as f64
            }
            _ => 0.0,
        }
    }

    /// Company-wide participant count, as reported on the first average row.
    pub fn participant_count(&self) -> u32 {
        self.results
            .as_ref()
            .and_then(|r| r.company_averages.first())
            .map(|avg| avg.total_users)
            .unwrap_or(0)
    }

    pub fn radar_data(&self) -> RadarData {
        self.results
            .as_ref()
            .map(RadarData::from_results)
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Department,
    Position,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Department,
        ProfileField::Position,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::Department => "Department",
            ProfileField::Position => "Position",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            ProfileField::Name => "profile-name",
            ProfileField::Email => "profile-email",
            ProfileField::Department => "profile-department",
            ProfileField::Position => "profile-position",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            department: user.department.clone().unwrap_or_default(),
            position: user.position.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Department => &self.department,
            ProfileField::Position => &self.position,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Department => self.department = value,
            ProfileField::Position => self.position = value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub form: ProfileForm,
    pub is_editing: bool,
}

// ---------------------------------------------------------------------------
// Career plan
// ---------------------------------------------------------------------------

/// The two places a career plan can be edited. Each keeps its own copy so
/// leaving one page never leaks half-typed text into the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CareerPlanTarget {
    /// Section on the profile page (read-only until "Edit").
    Profile,
    /// Dedicated career plan page (always an open form).
    Page,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CareerPlanEditor {
    pub plan: Option<UserCareerPlan>,
    pub form: UserCareerPlanCreate,
    pub is_loading: bool,
    pub is_editing: bool,
    pub is_saving: bool,
    pub is_deleting: bool,
}

impl CareerPlanEditor {
    /// Reset the form to the stored plan (or blank when there is none).
    pub fn restore_form(&mut self) {
        self.form = match &self.plan {
            Some(plan) => plan.fields.as_form(),
            None => UserCareerPlanCreate::default().as_form(),
        };
    }

    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CareerPlanState {
    pub profile: CareerPlanEditor,
    pub page: CareerPlanEditor,
}

impl CareerPlanState {
    pub fn editor(&self, target: CareerPlanTarget) -> &CareerPlanEditor {
        match target {
            CareerPlanTarget::Profile => &self.profile,
            CareerPlanTarget::Page => &self.page,
        }
    }

    pub fn editor_mut(&mut self, target: CareerPlanTarget) -> &mut CareerPlanEditor {
        match target {
            CareerPlanTarget::Profile => &mut self.profile,
            CareerPlanTarget::Page => &mut self.page,
        }
    }
}

// ---------------------------------------------------------------------------
// Root state
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub route: Route,
    pub current_user: Option<User>,
    pub auth: AuthFormState,
    pub evaluation: EvaluationState,
    pub dashboard: DashboardState,
    pub profile: ProfileState,
    pub career_plan: CareerPlanState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a message and return the side effects it asks for.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        crate::update::update(self, msg)
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Entry point for every UI event and network callback: update the global
/// state, release the borrow, then run the resulting commands.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));
    crate::command_executors::execute_commands(commands);
}
