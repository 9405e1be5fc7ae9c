// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Entrada a rutas (guardas + carga de datos), acciones asíncronas de página
// y re-render batcheado con gloo_timers.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::Route;
use crate::services::{current_route, telegram, ApiClient};
use crate::state::{AppState, Subscription};
use crate::utils::toast;
use crate::viewmodels::{
    AccountViewModel, AuditViewModel, CandidateDetailViewModel, CandidatesViewModel, LoginOutcome,
    LoginViewModel, UnlockOutcome,
};
use crate::views::{render_app, render_error_page};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
    _subscriptions: Vec<Subscription>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(ApiClient::browser(), current_route());

        // Varios cambios seguidos → un solo render en el próximo tick
        let render_scheduled = Rc::new(Cell::new(false));
        let on_change = state.subscribe_to_changes(move || {
            if render_scheduled.replace(true) {
                return;
            }
            let scheduled = render_scheduled.clone();
            Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        // Header muestra el usuario: la sesión también re-renderiza
        let session_state = state.clone();
        let on_session = state
            .session
            .subscribe(move || session_state.notify_subscribers());

        Ok(Self {
            state,
            root,
            _subscriptions: vec![on_change, on_session],
        })
    }

    /// Estado compartido (clones baratos: todo es Rc)
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Renderizar aplicación
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = match render_app(&self.state) {
            Ok(view) => view,
            Err(e) => {
                log::error!("❌ [APP] Error renderizando {}: {:?}", self.state.current_route().to_path(), e);
                render_error_page()?
            }
        };
        append_child(&self.root, &view)
    }
}

/// Entrar en la ruta actual: guardas y carga inicial de la página
pub fn enter_route(state: &AppState) {
    if let Some(redirect) = state.guard_current() {
        log::info!(
            "🛡️ [APP] {} requiere otra ruta → {}",
            state.current_route().to_path(),
            redirect.to_path()
        );
        state.api.navigator().navigate(&redirect);
        return;
    }

    let route = state.current_route();
    state.reset_page(&route);
    match route {
        Route::Login => start_telegram_login(state.clone()),
        Route::Candidates => load_candidates(state.clone()),
        Route::CandidateDetail(slug) => load_candidate_detail(state.clone(), slug),
        Route::Account => load_account(state.clone()),
        Route::AuditLogs => load_audit_logs(state.clone()),
        _ => {}
    }
}

/// Login automático si la página se abrió dentro de Telegram
pub fn start_telegram_login(state: AppState) {
    if *state.logging_in.borrow() {
        return;
    }

    let result = telegram::with_telegram_identity(move |identity| {
        let Some(data) = identity else {
            log::info!("ℹ️ [LOGIN] Sin identidad de Telegram, esperando al usuario");
            return;
        };

        *state.logging_in.borrow_mut() = true;
        state.notify_subscribers();

        spawn_local(async move {
            let vm = LoginViewModel::new(state.api.clone(), state.session.clone());
            let result = vm.login(&data).await;
            *state.logging_in.borrow_mut() = false;
            state.notify_subscribers();

            match result {
                Ok(LoginOutcome::Active) => toast::success("登录成功！"),
                Ok(LoginOutcome::PendingApproval) => {
                    toast::success("登录成功！");
                    toast::info("你的账户待审批，请等待管理员审核");
                }
                Err(message) => toast::error(&message),
            }
        });
    });

    if let Err(e) = result {
        log::error!("❌ [LOGIN] No se pudo cargar Telegram Web App: {:?}", e);
    }
}

pub fn load_candidates(state: AppState) {
    let (seq, params) = {
        let mut page = state.candidates.borrow_mut();
        (page.begin_request(), page.params.clone())
    };
    state.notify_subscribers();

    spawn_local(async move {
        let result = CandidatesViewModel::new(state.api.clone()).fetch(&params).await;
        if !state.is_on(&Route::Candidates) {
            return;
        }
        let error = state.candidates.borrow_mut().finish_request(seq, result);
        state.notify_subscribers();
        if let Some(message) = error {
            toast::error(&message);
        }
    });
}

pub fn load_candidate_detail(state: AppState, slug: String) {
    state.detail.borrow_mut().loading = true;
    state.notify_subscribers();

    spawn_local(async move {
        let route = Route::CandidateDetail(slug.clone());
        let result = CandidateDetailViewModel::new(state.api.clone()).load(&slug).await;

        if state.is_on(&route) {
            let mut page = state.detail.borrow_mut();
            page.loading = false;
            if let Ok(detail) = &result {
                page.detail = Some(detail.clone());
            }
        }
        state.notify_subscribers();

        if let Err(message) = result {
            toast::error(&message);
        }
    });
}

pub fn unlock_contact(state: AppState) {
    let (slug, detail) = {
        let mut page = state.detail.borrow_mut();
        if page.unlocking {
            return;
        }
        let Some(detail) = page.detail.clone() else {
            return;
        };
        page.unlocking = true;
        (page.slug.clone(), detail)
    };
    state.notify_subscribers();

    spawn_local(async move {
        let route = Route::CandidateDetail(slug.clone());
        let result = CandidateDetailViewModel::new(state.api.clone())
            .unlock(&slug, &detail)
            .await;

        let on_page = state.is_on(&route);
        {
            let mut page = state.detail.borrow_mut();
            page.unlocking = false;
            if let (true, Ok(UnlockOutcome::Unlocked(updated))) = (on_page, &result) {
                page.detail = Some(updated.clone());
            }
        }
        state.notify_subscribers();

        match result {
            Ok(UnlockOutcome::Unlocked(_)) => toast::success("已解锁联系方式！"),
            Ok(UnlockOutcome::QuotaRedirect(_)) => {}
            Err(message) => toast::error(&message),
        }
    });
}

pub fn load_account(state: AppState) {
    state.account.borrow_mut().loading = true;
    state.notify_subscribers();

    spawn_local(async move {
        let vm = AccountViewModel::new(state.api.clone(), state.session.clone());
        let result = vm.load().await;

        if state.is_on(&Route::Account) {
            let mut account = state.account.borrow_mut();
            account.loading = false;
            if let Ok(me) = &result {
                account.data = Some(me.clone());
            }
        }
        state.notify_subscribers();

        if let Err(message) = result {
            toast::error(&message);
        }
    });
}

pub fn load_audit_logs(state: AppState) {
    let (seq, page, page_size) = {
        let mut audit = state.audit.borrow_mut();
        (audit.begin_request(), audit.page, audit.page_size)
    };
    state.notify_subscribers();

    spawn_local(async move {
        let result = AuditViewModel::new(state.api.clone()).fetch(page, page_size).await;
        if !state.is_on(&Route::AuditLogs) {
            return;
        }
        let error = state.audit.borrow_mut().finish_request(seq, result);
        state.notify_subscribers();
        if let Some(message) = error {
            toast::error(&message);
        }
    });
}
