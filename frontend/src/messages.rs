use crate::models::{
    AiFeedbackResponse, AnswerCreate, CareerPlanField, CompetencyResult, QuestionWithAnswer,
    RegisterRequest, User, UserCareerPlan, UserCareerPlanCreate,
};
use crate::network::ApiError;
use crate::state::{CareerPlanTarget, ProfileField, RegisterForm};
use crate::storage::Route;
use crate::toast::ToastKind;

/// Why the dashboard is asking for AI feedback. Each kind hits the same
/// endpoint but treats the answer differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackRequest {
    /// The user just finished the questionnaire; regenerate, failures are
    /// only logged.
    AfterEvaluation,
    /// Normal dashboard visit; only a cached bundle is shown.
    CachedOnly,
    /// The "Request AI feedback" button; failures raise an alert.
    Manual,
}

impl FeedbackRequest {
    pub fn force_regenerate(self) -> bool {
        !matches!(self, FeedbackRequest::CachedOnly)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// The location hash changed (or the app just booted). `authenticated`
    /// is sampled from storage by whoever observed the change.
    RouteChanged { route: Route, authenticated: bool },
    Navigate(Route),

    // Auth
    LoginRequested { email: String, password: String },
    LoginSucceeded,
    LoginFailed(ApiError),
    RegisterRequested(RegisterForm),
    RegisterSucceeded,
    RegisterFailed(ApiError),
    CurrentUserLoaded(User),
    CurrentUserFailed(ApiError),
    Logout,

    // Evaluation
    QuestionsLoaded(Vec<QuestionWithAnswer>),
    QuestionsLoadFailed(ApiError),
    SelectAnswer { question_id: u32, score: u8 },
    NextQuestion,
    PreviousQuestion,
    SubmitAnswers,
    AnswersSubmitted,
    AnswersSubmitFailed(ApiError),

    // Dashboard
    ResultsLoaded(CompetencyResult),
    ResultsLoadFailed(ApiError),
    ReloadResults,
    RequestFeedback,
    FeedbackLoaded { request: FeedbackRequest, response: AiFeedbackResponse },
    FeedbackFailed { request: FeedbackRequest, error: ApiError },

    // Profile (basic information)
    EditProfile,
    UpdateProfileField { field: ProfileField, value: String },
    SaveProfile,
    CancelProfileEdit,

    // Career plan
    CareerPlanLoaded { target: CareerPlanTarget, plan: UserCareerPlan },
    CareerPlanMissing { target: CareerPlanTarget },
    EditCareerPlan(CareerPlanTarget),
    UpdateCareerPlanField { target: CareerPlanTarget, field: CareerPlanField, value: String },
    SaveCareerPlan(CareerPlanTarget),
    CareerPlanSaved { target: CareerPlanTarget, plan: UserCareerPlan },
    CareerPlanSaveFailed { target: CareerPlanTarget, error: ApiError },
    CancelCareerPlanEdit(CareerPlanTarget),
    /// Dispatched once the user has confirmed the deletion.
    DeleteCareerPlan(CareerPlanTarget),
    CareerPlanDeleted(CareerPlanTarget),
    CareerPlanDeleteFailed { target: CareerPlanTarget, error: ApiError },
}

/// Side effects requested by `update`. Executed after the state borrow has
/// been released.
pub enum Command {
    /// Chain another message to be processed
    SendMessage(Message),

    /// Execute a UI update function after state changes
    UpdateUI(Box<dyn FnOnce() + 'static>),

    /// Re-render the active page from state. Coalesced per dispatch.
    RenderView,

    /// Point `location.hash` at a route
    Navigate(Route),

    /// Blocking `window.alert`
    Alert(String),

    Toast { kind: ToastKind, text: String },

    /// Forget the bearer token
    ClearSession,

    // ---- API calls ----
    Login { email: String, password: String },
    Register(RegisterRequest),
    FetchCurrentUser,
    FetchQuestions,
    SubmitAnswers(Vec<AnswerCreate>),
    FetchResults,
    FetchFeedback(FeedbackRequest),
    FetchCareerPlan(CareerPlanTarget),
    SaveCareerPlan {
        target: CareerPlanTarget,
        payload: UserCareerPlanCreate,
        /// Update the existing plan rather than create one
        exists: bool,
    },
    DeleteCareerPlan(CareerPlanTarget),
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SendMessage(msg) => f.debug_tuple("SendMessage").field(msg).finish(),
            Command::UpdateUI(_) => f.write_str("UpdateUI(..)"),
            Command::RenderView => f.write_str("RenderView"),
            Command::Navigate(route) => f.debug_tuple("Navigate").field(route).finish(),
            Command::Alert(text) => f.debug_tuple("Alert").field(text).finish(),
            Command::Toast { kind, text } => f
                .debug_struct("Toast")
                .field("kind", kind)
                .field("text", text)
                .finish(),
            Command::ClearSession => f.write_str("ClearSession"),
            Command::Login { email, .. } => f.debug_struct("Login").field("email", email).finish_non_exhaustive(),
            Command::Register(req) => f.debug_tuple("Register").field(&req.email).finish(),
            Command::FetchCurrentUser => f.write_str("FetchCurrentUser"),
            Command::FetchQuestions => f.write_str("FetchQuestions"),
            Command::SubmitAnswers(answers) => f.debug_tuple("SubmitAnswers").field(answers).finish(),
            Command::FetchResults => f.write_str("FetchResults"),
            Command::FetchFeedback(req) => f.debug_tuple("FetchFeedback").field(req).finish(),
            Command::FetchCareerPlan(target) => f.debug_tuple("FetchCareerPlan").field(target).finish(),
            Command::SaveCareerPlan { target, exists, .. } => f
                .debug_struct("SaveCareerPlan")
                .field("target", target)
                .field("exists", exists)
                .finish_non_exhaustive(),
            Command::DeleteCareerPlan(target) => f.debug_tuple("DeleteCareerPlan").field(target).finish(),
        }
    }
}
