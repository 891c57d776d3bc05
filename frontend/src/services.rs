// Data access client for the hosted record store (PostgREST-style REST plus
// a password-grant token endpoint). The signed-in session is passed
// explicitly into every call rather than read from ambient storage.
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use settlo_shared::StoreError;
use uuid::Uuid;

const STORE_URL: &str = match option_env!("SETTLO_STORE_URL") {
    Some(url) => url,
    None => "http://localhost:54321",
};
const STORE_KEY: &str = match option_env!("SETTLO_STORE_KEY") {
    Some(key) => key,
    None => "settlo-publishable-key",
};
const SESSION_KEY: &str = "settlo_session";

pub type StoreResult<T> = Result<T, StoreError>;

// ============================================
// SESSION
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

// ============================================
// HTTP CLIENT
// ============================================

struct StoreClient;

impl StoreClient {
    fn rest(path: &str) -> String {
        format!("{STORE_URL}/rest/v1{path}")
    }

    fn auth(path: &str) -> String {
        format!("{STORE_URL}/auth/v1{path}")
    }

    fn bearer(session: &Session) -> String {
        format!("Bearer {}", session.access_token)
    }

    fn authed(req: RequestBuilder, session: &Session) -> RequestBuilder {
        req.header("apikey", STORE_KEY)
            .header("Authorization", &Self::bearer(session))
    }

    async fn check(response: Response) -> StoreResult<Response> {
        if response.ok() {
            Ok(response)
        } else {
            // The REST and auth endpoints disagree on error body shape, so
            // probe for either message key.
            let status = response.status();
            let message = match response.json::<serde_json::Value>().await {
                Ok(body) => body
                    .get("message")
                    .or_else(|| body.get("error_description"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {status}")),
                Err(_) => format!("HTTP {status}"),
            };
            Err(StoreError::access(message))
        }
    }

    async fn send(req: RequestBuilder) -> StoreResult<Response> {
        let response = req
            .send()
            .await
            .map_err(|e| StoreError::access(e.to_string()))?;
        Self::check(response).await
    }

    async fn send_json<B: Serialize>(req: RequestBuilder, body: &B) -> StoreResult<Response> {
        let response = req
            .json(body)
            .map_err(|e| StoreError::access(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::access(e.to_string()))?;
        Self::check(response).await
    }

    async fn read<T: DeserializeOwned>(response: Response) -> StoreResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::access(e.to_string()))
    }
}

// ============================================
// AUTH SERVICE
// ============================================

pub mod auth {
    use super::*;

    #[derive(Debug, Serialize)]
    struct PasswordGrant<'a> {
        email: &'a str,
        password: &'a str,
    }

    pub async fn sign_in(email: &str, password: &str) -> StoreResult<Session> {
        let url = StoreClient::auth("/token?grant_type=password");
        let req = Request::post(&url).header("apikey", STORE_KEY);
        let response = StoreClient::send_json(req, &PasswordGrant { email, password }).await?;
        let session: Session = StoreClient::read(response).await?;
        store_session(&session);
        Ok(session)
    }

    /// Best-effort remote revocation; the local session is cleared either way.
    pub async fn sign_out(session: Option<&Session>) {
        if let Some(session) = session {
            let url = StoreClient::auth("/logout");
            let _ = StoreClient::authed(Request::post(&url), session).send().await;
        }
        clear_session();
    }

    pub fn load_session() -> Option<Session> {
        LocalStorage::get::<Session>(SESSION_KEY).ok()
    }

    pub fn store_session(session: &Session) {
        let _ = LocalStorage::set(SESSION_KEY, session);
    }

    pub fn clear_session() {
        LocalStorage::delete(SESSION_KEY);
    }
}

// ============================================
// LEADS SERVICE
// ============================================

pub mod leads {
    use super::*;
    use settlo_shared::{Lead, LeadRecord, NewLead, NewLeadRecord};

    pub(crate) fn list_endpoint() -> String {
        "/leads?select=*&order=created_at.desc".to_string()
    }

    pub(crate) fn row_endpoint(id: Uuid) -> String {
        format!("/leads?id=eq.{id}")
    }

    /// All leads owned by the signed-in user, newest first. Ownership is
    /// enforced by the store's row-level policies.
    pub async fn list(session: Option<&Session>) -> StoreResult<Vec<Lead>> {
        let session = session.ok_or(StoreError::AuthRequired)?;
        let url = StoreClient::rest(&list_endpoint());
        let response = StoreClient::send(StoreClient::authed(Request::get(&url), session)).await?;
        let rows: Vec<LeadRecord> = StoreClient::read(response).await?;
        Ok(rows.into_iter().map(Lead::from).collect())
    }

    /// Persists a new lead and returns the stored row with its assigned id.
    pub async fn create(session: Option<&Session>, lead: &NewLead) -> StoreResult<Lead> {
        let session = session.ok_or(StoreError::AuthRequired)?;
        let url = StoreClient::rest("/leads");
        let req = StoreClient::authed(Request::post(&url), session)
            .header("Prefer", "return=representation")
            .header("Accept", "application/vnd.pgrst.object+json");
        let response = StoreClient::send_json(req, &NewLeadRecord::from(lead)).await?;
        let row: LeadRecord = StoreClient::read(response).await?;
        Ok(row.into())
    }

    /// Wholesale overwrite of every mutable field. An id that no longer
    /// exists matches no rows; the store does not treat that as an error.
    pub async fn update(session: Option<&Session>, id: Uuid, lead: &NewLead) -> StoreResult<()> {
        let session = session.ok_or(StoreError::AuthRequired)?;
        let url = StoreClient::rest(&row_endpoint(id));
        let req =
            StoreClient::authed(Request::patch(&url), session).header("Prefer", "return=minimal");
        StoreClient::send_json(req, &NewLeadRecord::from(lead)).await?;
        Ok(())
    }

    /// Idempotent: a repeated delete matches no rows and succeeds.
    pub async fn delete(session: Option<&Session>, id: Uuid) -> StoreResult<()> {
        let session = session.ok_or(StoreError::AuthRequired)?;
        let url = StoreClient::rest(&row_endpoint(id));
        StoreClient::send(StoreClient::authed(Request::delete(&url), session)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    // Pure request-building checks; they run under the wasm test runner and
    // plain cargo test alike.
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn rest_paths_target_the_leads_table() {
        assert_eq!(
            leads::list_endpoint(),
            "/leads?select=*&order=created_at.desc"
        );

        let id = Uuid::parse_str("4b1e7c52-9d3a-4f06-9a41-0c2f7a60d8ee").unwrap();
        assert_eq!(
            leads::row_endpoint(id),
            "/leads?id=eq.4b1e7c52-9d3a-4f06-9a41-0c2f7a60d8ee"
        );
        // A double-clicked delete builds the identical filter twice; the
        // second request matches nothing and is harmless.
        assert_eq!(leads::row_endpoint(id), leads::row_endpoint(id));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn urls_join_base_and_version_prefix() {
        assert!(StoreClient::rest("/leads").ends_with("/rest/v1/leads"));
        assert!(
            StoreClient::auth("/token?grant_type=password")
                .ends_with("/auth/v1/token?grant_type=password")
        );
    }
}
