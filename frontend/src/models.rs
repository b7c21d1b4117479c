use serde::{Deserialize, Serialize};

// Records mirrored from the backend's `/api/v1` responses. Timestamps stay as
// the ISO strings the backend sends; only the dashboard formats them.

/// Authenticated user returned by `/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompetencyItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub competency_item_id: u32,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_max_score")]
    pub max_score: u8,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub competency_item: Option<CompetencyItem>,
}

fn default_max_score() -> u8 {
    crate::constants::MAX_SCORE
}

/// Question from `/questions/with-answers`, carrying the user's previous
/// score when one exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionWithAnswer {
    #[serde(flatten)]
    pub question: Question,
    #[serde(default)]
    pub user_answer: Option<u8>,
}

impl QuestionWithAnswer {
    pub fn id(&self) -> u32 {
        self.question.id
    }

    /// Name of the competency this question belongs to, if the backend
    /// embedded it.
    pub fn competency_name(&self) -> Option<&str> {
        self.question
            .competency_item
            .as_ref()
            .map(|item| item.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: u32,
    pub question_id: u32,
    pub user_id: u32,
    pub score: u8,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCreate {
    pub question_id: u32,
    pub score: u8,
}

/// Body of `POST /answers/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerBulkCreate {
    pub answers: Vec<AnswerCreate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserCompetency {
    pub id: u32,
    pub user_id: u32,
    pub competency_item_id: u32,
    pub score: f64,
    #[serde(default)]
    pub calculated_at: Option<String>,
    #[serde(default)]
    pub competency_item: Option<CompetencyItem>,
}

impl UserCompetency {
    pub fn name(&self) -> &str {
        self.competency_item
            .as_ref()
            .map(|item| item.name.as_str())
            .unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyAverageCompetency {
    pub id: u32,
    pub competency_item_id: u32,
    pub average_score: f64,
    pub total_users: u32,
    #[serde(default)]
    pub calculated_at: Option<String>,
    #[serde(default)]
    pub competency_item: Option<CompetencyItem>,
}

/// `/competencies/results`: the user's scores plus company averages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetencyResult {
    #[serde(default)]
    pub user_competencies: Vec<UserCompetency>,
    #[serde(default)]
    pub company_averages: Vec<CompanyAverageCompetency>,
}

/// Narrative sections of an AI feedback bundle. The backend stores the
/// sections as a free-form map, so any of them may be missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiFeedback {
    pub strengths: String,
    pub improvements: String,
    pub action_plan: String,
    pub learning_resources: String,
    pub reality_check: String,
    pub overall: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookRecommendation {
    pub title: String,
    pub author: String,
    pub reason: String,
    pub category: String,
}

/// `/competencies/feedback` response.
///
/// * cached or freshly generated: `feedback` is set, `from_cache` tells which;
/// * no cache and no regeneration requested: `feedback` is `None` and
///   `message` explains why;
/// * regeneration without any results: only `error` is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AiFeedbackResponse {
    #[serde(default)]
    pub feedback: Option<AiFeedback>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub career_suggestions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub book_recommendations: Vec<BookRecommendation>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub from_cache: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The free-text fields of a career plan, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CareerPlanField {
    CareerDirection,
    TargetPosition,
    TargetTimeframe,
    StrengthsToEnhance,
    WeaknessesToOvercome,
    SpecificGoals,
    PersonalityTraits,
    PreferredLearningStyle,
    ChallengesFaced,
    MotivationFactors,
}

impl CareerPlanField {
    pub const ALL: [CareerPlanField; 10] = [
        CareerPlanField::CareerDirection,
        CareerPlanField::TargetPosition,
        CareerPlanField::TargetTimeframe,
        CareerPlanField::StrengthsToEnhance,
        CareerPlanField::WeaknessesToOvercome,
        CareerPlanField::SpecificGoals,
        CareerPlanField::PersonalityTraits,
        CareerPlanField::PreferredLearningStyle,
        CareerPlanField::ChallengesFaced,
        CareerPlanField::MotivationFactors,
    ];

    /// JSON key, also used as the DOM id of the form control.
    pub fn key(self) -> &'static str {
        match self {
            CareerPlanField::CareerDirection => "career_direction",
            CareerPlanField::TargetPosition => "target_position",
            CareerPlanField::TargetTimeframe => "target_timeframe",
            CareerPlanField::StrengthsToEnhance => "strengths_to_enhance",
            CareerPlanField::WeaknessesToOvercome => "weaknesses_to_overcome",
            CareerPlanField::SpecificGoals => "specific_goals",
            CareerPlanField::PersonalityTraits => "personality_traits",
            CareerPlanField::PreferredLearningStyle => "preferred_learning_style",
            CareerPlanField::ChallengesFaced => "challenges_faced",
            CareerPlanField::MotivationFactors => "motivation_factors",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CareerPlanField::CareerDirection => "Career direction",
            CareerPlanField::TargetPosition => "Target position",
            CareerPlanField::TargetTimeframe => "Target timeframe",
            CareerPlanField::StrengthsToEnhance => "Strengths to build on",
            CareerPlanField::WeaknessesToOvercome => "Weaknesses to overcome",
            CareerPlanField::SpecificGoals => "Specific goals",
            CareerPlanField::PersonalityTraits => "Personality traits",
            CareerPlanField::PreferredLearningStyle => "Preferred learning style",
            CareerPlanField::ChallengesFaced => "Current challenges",
            CareerPlanField::MotivationFactors => "Motivation factors",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            CareerPlanField::CareerDirection => "e.g. tech lead, manager, specialist",
            CareerPlanField::TargetPosition => "e.g. senior engineer, team leader",
            CareerPlanField::TargetTimeframe => "e.g. within 2 years, in 3-5 years",
            CareerPlanField::StrengthsToEnhance => "Strengths you want to make the most of",
            CareerPlanField::WeaknessesToOvercome => "Areas you want to improve",
            CareerPlanField::SpecificGoals => "Concrete goals you want to reach",
            CareerPlanField::PersonalityTraits => "How would you describe yourself?",
            CareerPlanField::PreferredLearningStyle => "e.g. books, courses, hands-on work",
            CareerPlanField::ChallengesFaced => "What is holding you back right now?",
            CareerPlanField::MotivationFactors => "What keeps you motivated?",
        }
    }

    /// Short single-line answers get an `<input>`, everything else a
    /// `<textarea>`.
    pub fn is_multiline(self) -> bool {
        !matches!(
            self,
            CareerPlanField::TargetPosition | CareerPlanField::TargetTimeframe
        )
    }
}

/// Career plan as stored by the backend (`/career-plans/`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserCareerPlan {
    pub id: u32,
    pub user_id: u32,
    #[serde(flatten)]
    pub fields: UserCareerPlanCreate,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST`/`PUT /career-plans/`; also the editable form copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCareerPlanCreate {
    #[serde(default)]
    pub career_direction: Option<String>,
    #[serde(default)]
    pub target_position: Option<String>,
    #[serde(default)]
    pub target_timeframe: Option<String>,
    #[serde(default)]
    pub strengths_to_enhance: Option<String>,
    #[serde(default)]
    pub weaknesses_to_overcome: Option<String>,
    #[serde(default)]
    pub specific_goals: Option<String>,
    #[serde(default)]
    pub personality_traits: Option<String>,
    #[serde(default)]
    pub preferred_learning_style: Option<String>,
    #[serde(default)]
    pub challenges_faced: Option<String>,
    #[serde(default)]
    pub motivation_factors: Option<String>,
}

impl UserCareerPlanCreate {
    fn slot(&self, field: CareerPlanField) -> &Option<String> {
        match field {
            CareerPlanField::CareerDirection => &self.career_direction,
            CareerPlanField::TargetPosition => &self.target_position,
            CareerPlanField::TargetTimeframe => &self.target_timeframe,
            CareerPlanField::StrengthsToEnhance => &self.strengths_to_enhance,
            CareerPlanField::WeaknessesToOvercome => &self.weaknesses_to_overcome,
            CareerPlanField::SpecificGoals => &self.specific_goals,
            CareerPlanField::PersonalityTraits => &self.personality_traits,
            CareerPlanField::PreferredLearningStyle => &self.preferred_learning_style,
            CareerPlanField::ChallengesFaced => &self.challenges_faced,
            CareerPlanField::MotivationFactors => &self.motivation_factors,
        }
    }

    fn slot_mut(&mut self, field: CareerPlanField) -> &mut Option<String> {
        match field {
            CareerPlanField::CareerDirection => &mut self.career_direction,
            CareerPlanField::TargetPosition => &mut self.target_position,
            CareerPlanField::TargetTimeframe => &mut self.target_timeframe,
            CareerPlanField::StrengthsToEnhance => &mut self.strengths_to_enhance,
            CareerPlanField::WeaknessesToOvercome => &mut self.weaknesses_to_overcome,
            CareerPlanField::SpecificGoals => &mut self.specific_goals,
            CareerPlanField::PersonalityTraits => &mut self.personality_traits,
            CareerPlanField::PreferredLearningStyle => &mut self.preferred_learning_style,
            CareerPlanField::ChallengesFaced => &mut self.challenges_faced,
            CareerPlanField::MotivationFactors => &mut self.motivation_factors,
        }
    }

    /// Value of `field`, empty when unset.
    pub fn get(&self, field: CareerPlanField) -> &str {
        self.slot(field).as_deref().unwrap_or("")
    }

    pub fn set(&mut self, field: CareerPlanField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Form copy with every field present, mirroring what the edit form
    /// submits (`""` rather than `null` for untouched fields).
    pub fn as_form(&self) -> Self {
        let mut form = Self::default();
        for field in CareerPlanField::ALL {
            form.set(field, self.get(field));
        }
        form
    }

    pub fn is_blank(&self) -> bool {
        CareerPlanField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }
}
