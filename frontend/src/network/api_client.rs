use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response, UrlSearchParams};

use super::{api_config, ApiError};
use crate::models::{
    AiFeedbackResponse, Answer, AnswerBulkCreate, AnswerCreate, CompetencyItem,
    CompetencyResult, Question, QuestionWithAnswer, RegisterRequest, TokenResponse, User,
    UserCareerPlan, UserCareerPlanCreate,
};
use crate::messages::Message;
use crate::state::dispatch_global_message;
use crate::utils;

enum Body {
    Json(String),
    Form(String),
}

// REST client for the `/api/v1` backend. Every call is a one-shot fetch; the
// caller decides what to do with failures.
pub struct ApiClient;

impl ApiClient {
    // ---------------- Auth ----------------

    /// Exchange credentials for a bearer token. The backend expects an OAuth2
    /// password form, so the email travels as `username`.
    pub async fn login(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let params = UrlSearchParams::new()?;
        params.append("username", email);
        params.append("password", password);
        let body = String::from(params.to_string());

        // Wrong credentials come back as 401 too; that is not an expired session.
        let text = Self::send("/auth/login", "POST", Some(Body::Form(body)), false).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
        Self::fetch_json("/auth/register", "POST", Some(request)).await
    }

    pub async fn current_user() -> Result<User, ApiError> {
        Self::fetch_json::<User, ()>("/users/me", "GET", None).await
    }

    // ---------------- Questions & answers ----------------

    pub async fn questions() -> Result<Vec<Question>, ApiError> {
        Self::fetch_json::<_, ()>("/questions/", "GET", None).await
    }

    pub async fn questions_with_answers() -> Result<Vec<QuestionWithAnswer>, ApiError> {
        Self::fetch_json::<_, ()>("/questions/with-answers", "GET", None).await
    }

    pub async fn question(question_id: u32) -> Result<Question, ApiError> {
        let path = format!("/questions/{}", question_id);
        Self::fetch_json::<_, ()>(&path, "GET", None).await
    }

    pub async fn submit_answers(answers: Vec<AnswerCreate>) -> Result<Vec<Answer>, ApiError> {
        let body = AnswerBulkCreate { answers };
        Self::fetch_json("/answers/", "POST", Some(&body)).await
    }

    pub async fn user_answers() -> Result<Vec<Answer>, ApiError> {
        Self::fetch_json::<_, ()>("/answers/", "GET", None).await
    }

    // ---------------- Competencies ----------------

    pub async fn competency_items() -> Result<Vec<CompetencyItem>, ApiError> {
        Self::fetch_json::<_, ()>("/competencies/items", "GET", None).await
    }

    pub async fn competency_results() -> Result<CompetencyResult, ApiError> {
        Self::fetch_json::<_, ()>("/competencies/results", "GET", None).await
    }

    pub async fn ai_feedback(force_regenerate: bool) -> Result<AiFeedbackResponse, ApiError> {
        let path = format!("/competencies/feedback?force_regenerate={}", force_regenerate);
        Self::fetch_json::<_, ()>(&path, "GET", None).await
    }

    // ---------------- Career plan ----------------

    pub async fn career_plan() -> Result<UserCareerPlan, ApiError> {
        Self::fetch_json::<_, ()>("/career-plans/", "GET", None).await
    }

    pub async fn create_career_plan(plan: &UserCareerPlanCreate) -> Result<UserCareerPlan, ApiError> {
        Self::fetch_json("/career-plans/", "POST", Some(plan)).await
    }

    pub async fn update_career_plan(plan: &UserCareerPlanCreate) -> Result<UserCareerPlan, ApiError> {
        Self::fetch_json("/career-plans/", "PUT", Some(plan)).await
    }

    pub async fn delete_career_plan() -> Result<(), ApiError> {
        Self::send("/career-plans/", "DELETE", None, true).await?;
        Ok(())
    }

    // ---------------- Transport ----------------

    /// Send a request with an optional JSON body and decode the JSON reply.
    pub async fn fetch_json<T, B>(path: &str, method: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = match body {
            Some(b) => Some(Body::Json(serde_json::to_string(b)?)),
            None => None,
        };
        let text = Self::send(path, method, body, true).await?;
        serde_json::from_str(&text).map_err(|e| {
            web_sys::console::error_1(&format!("Failed to decode {} {}: {}", method, path, e).into());
            ApiError::from(e)
        })
    }

    async fn send(
        path: &str,
        method: &str,
        body: Option<Body>,
        session_request: bool,
    ) -> Result<String, ApiError> {
        let url = api_config().url(path);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        if let Some(jwt) = utils::current_jwt() {
            headers.append("Authorization", &format!("Bearer {}", jwt))?;
        }
        match body {
            Some(Body::Json(data)) => {
                headers.append("Content-Type", "application/json")?;
                opts.set_body(&JsValue::from_str(&data));
            }
            Some(Body::Form(data)) => {
                headers.append("Content-Type", "application/x-www-form-urlencoded")?;
                opts.set_body(&JsValue::from_str(&data));
            }
            None => {}
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(&url, &opts)?;
        let window = web_sys::window().ok_or_else(|| ApiError::Js("no global window".into()))?;

        crate::debug_log!("{} {}", method, url);
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let text = JsFuture::from(resp.text()?).await?;
        let text = text.as_string().unwrap_or_default();

        if !resp.ok() {
            let error =
                ApiError::for_failed_response(resp.status(), &resp.status_text(), &text, session_request);
            if error.ends_session() {
                dispatch_global_message(Message::Logout);
            }
            return Err(error);
        }

        Ok(text)
    }
}
