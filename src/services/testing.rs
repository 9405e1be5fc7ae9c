// Fakes en memoria para los tests (transporte, credenciales, navegación)

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::router::Route;
use crate::services::api_client::ApiClient;
use crate::services::credentials::CredentialStore;
use crate::services::navigation::Navigator;
use crate::services::transport::{ApiRequest, ApiResponse, Transport};

#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, String>>>,
    pub requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.responses.borrow_mut().push_back(Err(message.to_string()));
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_string()))
    }
}

#[derive(Default)]
pub struct MemoryCredentials {
    token: RefCell<Option<String>>,
    pub clears: Cell<usize>,
}

impl MemoryCredentials {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
            ..Self::default()
        }
    }
}

impl CredentialStore for MemoryCredentials {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn clear_token(&self) {
        self.clears.set(self.clears.get() + 1);
        *self.token.borrow_mut() = None;
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        self.routes.borrow_mut().push(route.clone());
    }
}

/// Gateway conectado a fakes, con acceso a cada uno
pub struct Harness {
    pub transport: Rc<FakeTransport>,
    pub credentials: Rc<MemoryCredentials>,
    pub navigator: Rc<RecordingNavigator>,
    pub api: ApiClient,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_credentials(MemoryCredentials::default())
    }

    pub fn with_credentials(credentials: MemoryCredentials) -> Self {
        let transport = Rc::new(FakeTransport::default());
        let credentials = Rc::new(credentials);
        let navigator = Rc::new(RecordingNavigator::default());
        let api = ApiClient::new(transport.clone(), credentials.clone(), navigator.clone());
        Self {
            transport,
            credentials,
            navigator,
            api,
        }
    }
}
