// ============================================================================
// CANDIDATE DETAIL VIEWMODEL - Detalle + desbloqueo de contacto
// ============================================================================
// 402/409 del unlock se resuelven aquí (página de cuota), no en el gateway.
// ============================================================================

use crate::models::CandidateDetail;
use crate::router::{QuotaReason, Route};
use crate::services::{ApiClient, ApiError};

pub const DETAIL_FAILED: &str = "获取候选人信息失败";
pub const UNLOCK_FAILED: &str = "解锁失败";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateDetailState {
    pub slug: String,
    pub detail: Option<CandidateDetail>,
    pub loading: bool,
    pub unlocking: bool,
}

impl CandidateDetailState {
    pub fn for_slug(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UnlockOutcome {
    /// Contacto visible, detalle actualizado
    Unlocked(CandidateDetail),
    /// Sin cuota: se navegó a la página de cuota
    QuotaRedirect(Route),
}

/// Ruta de cuota para un fallo de unlock (402 → agotada, 409 → sin configurar)
pub fn quota_route_for(error: &ApiError, slug: &str) -> Option<Route> {
    let reason = match error.status()? {
        402 => QuotaReason::Exceeded,
        409 => QuotaReason::NotConfigured,
        _ => return None,
    };
    Some(Route::Quota {
        reason,
        return_to: Route::CandidateDetail(slug.to_string()).to_path(),
    })
}

pub struct CandidateDetailViewModel {
    api: ApiClient,
}

impl CandidateDetailViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Cargar detalle. En error vuelve a la lista salvo que el gateway ya haya navegado.
    pub async fn load(&self, slug: &str) -> Result<CandidateDetail, String> {
        log::info!("👤 [DETAIL] Cargando candidato {}", slug);
        match self.api.get_candidate(slug).await {
            Ok(detail) => Ok(detail),
            Err(e) => {
                log::error!("❌ [DETAIL] {}", e);
                if !e.was_redirected() {
                    self.api.navigator().navigate(&Route::Candidates);
                }
                Err(e.user_message(DETAIL_FAILED))
            }
        }
    }

    /// Desbloquear el contacto del candidato de la ruta `slug`
    pub async fn unlock(&self, slug: &str, detail: &CandidateDetail) -> Result<UnlockOutcome, String> {
        match self.api.unlock_candidate(slug).await {
            Ok(contact) => {
                log::info!("✅ [DETAIL] Contacto desbloqueado: {}", slug);
                Ok(UnlockOutcome::Unlocked(detail.clone().with_contact(contact)))
            }
            Err(e) => match quota_route_for(&e, slug) {
                Some(route) => {
                    log::warn!("🎫 [DETAIL] Sin cuota ({}) → {}", e, route.to_path());
                    self.api.navigator().navigate(&route);
                    Ok(UnlockOutcome::QuotaRedirect(route))
                }
                None => Err(e.user_message(UNLOCK_FAILED)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Candidate;
    use crate::services::testing::Harness;
    use futures::executor::block_on;

    fn locked(slug: &str) -> CandidateDetail {
        CandidateDetail {
            candidate: Candidate {
                slug: slug.to_string(),
                ..Default::default()
            },
            contact: None,
        }
    }

    #[test]
    fn test_unlock_success_shows_contact() {
        let h = Harness::new();
        h.transport
            .respond(200, r#"{"tg_username": "dev", "email": "dev@x.io", "phone": ""}"#);
        let vm = CandidateDetailViewModel::new(h.api.clone());

        let outcome = block_on(vm.unlock("dev", &locked("dev"))).unwrap();

        let UnlockOutcome::Unlocked(detail) = outcome else {
            panic!("expected unlocked detail");
        };
        assert!(detail.candidate.unlocked_contact);
        assert_eq!(detail.visible_contact().unwrap().email, "dev@x.io");
        assert!(h.navigator.visited().is_empty());
    }

    #[test]
    fn test_unlock_402_goes_to_quota_exceeded() {
        let h = Harness::new();
        h.transport.respond(402, r#"{"error": "quota_exceeded"}"#);
        let vm = CandidateDetailViewModel::new(h.api.clone());

        let outcome = block_on(vm.unlock("alice", &locked("alice"))).unwrap();

        let expected = Route::Quota {
            reason: QuotaReason::Exceeded,
            return_to: "/candidates/alice".to_string(),
        };
        assert_eq!(outcome, UnlockOutcome::QuotaRedirect(expected.clone()));
        assert_eq!(expected.to_path(), "/quota?reason=exceeded&return=%2Fcandidates%2Falice");
        assert_eq!(h.navigator.visited(), vec![expected]);
    }

    #[test]
    fn test_unlock_409_goes_to_quota_not_configured() {
        let h = Harness::new();
        h.transport.respond(409, r#"{"error": "quota_not_configured"}"#);
        let vm = CandidateDetailViewModel::new(h.api.clone());

        block_on(vm.unlock("bob", &locked("bob"))).unwrap();

        assert_eq!(
            h.navigator.visited()[0].to_path(),
            "/quota?reason=not_configured&return=%2Fcandidates%2Fbob"
        );
    }

    #[test]
    fn test_unlock_uses_route_slug_when_body_has_none() {
        let h = Harness::new();
        h.transport.respond(200, r#"{"tg_username": "dev"}"#);
        h.transport.respond(402, "");
        let vm = CandidateDetailViewModel::new(h.api.clone());

        block_on(vm.unlock("alice", &locked(""))).unwrap();
        assert_eq!(
            h.transport.last_request().unwrap().path,
            "/api/candidates/alice/unlock"
        );

        let outcome = block_on(vm.unlock("alice", &locked(""))).unwrap();
        assert_eq!(
            outcome,
            UnlockOutcome::QuotaRedirect(Route::Quota {
                reason: QuotaReason::Exceeded,
                return_to: "/candidates/alice".to_string(),
            })
        );
    }

    #[test]
    fn test_unlock_other_error_is_message() {
        let h = Harness::new();
        h.transport.respond(500, "");
        h.transport.respond(404, r#"{"error": "candidate_not_found"}"#);
        let vm = CandidateDetailViewModel::new(h.api.clone());

        assert_eq!(block_on(vm.unlock("x", &locked("x"))), Err(UNLOCK_FAILED.to_string()));
        assert_eq!(
            block_on(vm.unlock("x", &locked("x"))),
            Err("candidate_not_found".to_string())
        );
        assert!(h.navigator.visited().is_empty());
    }

    #[test]
    fn test_load_error_returns_to_list() {
        let h = Harness::new();
        h.transport.respond(404, r#"{"error": "not_found"}"#);
        let vm = CandidateDetailViewModel::new(h.api.clone());

        assert_eq!(block_on(vm.load("ghost")), Err("not_found".to_string()));
        assert_eq!(h.navigator.visited(), vec![Route::Candidates]);
    }

    #[test]
    fn test_load_401_keeps_gateway_redirect() {
        let h = Harness::new();
        h.transport.respond(401, "");
        let vm = CandidateDetailViewModel::new(h.api.clone());

        assert!(block_on(vm.load("a")).is_err());
        assert_eq!(h.navigator.visited(), vec![Route::Unauthorized]);
    }
}
