// ============================================================================
// CANDIDATES VIEWMODEL - Lista, filtros y paginación
// ============================================================================

use crate::models::{Candidate, CandidateListParams};
use crate::services::ApiClient;
use crate::viewmodels::pagination;

pub const LIST_FAILED: &str = "获取候选人列表失败";

/// Valores crudos del formulario de filtros (tal como están en los inputs)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterForm {
    pub q: String,
    pub skill: String,
    pub english: String,
    pub bc_experience: bool,
    pub availability_days_max: String,
    pub salary_min: String,
    pub salary_max: String,
    pub show_advanced: bool,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse::<T>().ok()
}

impl FilterForm {
    /// Aplicar filtros sobre los parámetros actuales: vuelve a la página 1
    pub fn apply_to(&self, current: &CandidateListParams) -> CandidateListParams {
        CandidateListParams {
            q: non_empty(&self.q),
            skill: non_empty(&self.skill),
            english: non_empty(&self.english),
            // Desmarcado = sin filtro (no "false")
            bc_experience: self.bc_experience.then_some(true),
            availability_days_max: parse_number(&self.availability_days_max),
            salary_min: parse_number(&self.salary_min),
            salary_max: parse_number(&self.salary_max),
            page: 1,
            page_size: current.page_size,
        }
    }
}

/// Estado de la página de candidatos
#[derive(Clone, Debug, PartialEq)]
pub struct CandidatesPageState {
    pub params: CandidateListParams,
    pub form: FilterForm,
    pub items: Vec<Candidate>,
    pub loading: bool,
    /// Secuencia de la última petición; respuestas antiguas se descartan
    pub request_seq: u64,
}

impl Default for CandidatesPageState {
    fn default() -> Self {
        Self {
            params: CandidateListParams::default(),
            form: FilterForm::default(),
            items: Vec::new(),
            loading: false,
            request_seq: 0,
        }
    }
}

impl CandidatesPageState {
    pub fn apply_filters(&mut self) {
        self.params = self.form.apply_to(&self.params);
    }

    /// Limpiar filtros: `{page: 1, page_size: 20}` sin opcionales
    pub fn reset_filters(&mut self) {
        self.form = FilterForm::default();
        self.params = CandidateListParams::default();
    }

    pub fn previous_page(&mut self) {
        self.params.page = pagination::previous_page(self.params.page);
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.params.page = pagination::next_page(self.params.page);
        }
    }

    pub fn can_go_previous(&self) -> bool {
        pagination::can_go_previous(self.params.page)
    }

    pub fn can_go_next(&self) -> bool {
        pagination::can_go_next(self.items.len(), self.params.page_size)
    }

    /// Marcar inicio de carga y devolver el número de petición
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    /// Aplicar resultado si corresponde a la última petición
    pub fn finish_request(&mut self, seq: u64, result: Result<Vec<Candidate>, String>) -> Option<String> {
        if seq != self.request_seq {
            log::debug!("🗑️ [CANDIDATES] Respuesta obsoleta #{} descartada", seq);
            return None;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(message) => Some(message),
        }
    }
}

pub struct CandidatesViewModel {
    api: ApiClient,
}

impl CandidatesViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, params: &CandidateListParams) -> Result<Vec<Candidate>, String> {
        log::info!(
            "📋 [CANDIDATES] Página {} (filtros: {})",
            params.page,
            params.has_filters()
        );
        self.api
            .list_candidates(params)
            .await
            .map(|response| response.items)
            .map_err(|e| e.user_message(LIST_FAILED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::Harness;
    use futures::executor::block_on;

    fn candidates(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| Candidate {
                slug: format!("c-{}", i),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_form_to_params() {
        let form = FilterForm {
            q: "  solidity ".into(),
            english: "fluent".into(),
            bc_experience: true,
            salary_min: "20000".into(),
            salary_max: "abc".into(),
            ..Default::default()
        };
        let current = CandidateListParams {
            page: 4,
            ..Default::default()
        };
        let params = form.apply_to(&current);

        assert_eq!(params.q.as_deref(), Some("solidity"));
        assert_eq!(params.skill, None);
        assert_eq!(params.english.as_deref(), Some("fluent"));
        assert_eq!(params.bc_experience, Some(true));
        assert_eq!(params.salary_min, Some(20000));
        assert_eq!(params.salary_max, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
    }

    #[test]
    fn test_unchecked_bc_is_absent() {
        let params = FilterForm::default().apply_to(&CandidateListParams::default());
        assert_eq!(params.bc_experience, None);
        assert!(!params.has_filters());
    }

    #[test]
    fn test_reset_filters() {
        let mut state = CandidatesPageState::default();
        state.form.q = "go".into();
        state.form.skill = "Go".into();
        state.params.page = 5;
        state.apply_filters();
        assert!(state.params.has_filters());

        state.reset_filters();

        assert_eq!(state.params, CandidateListParams::default());
        assert_eq!(state.params.page, 1);
        assert_eq!(state.params.page_size, 20);
        assert_eq!(state.form, FilterForm::default());
    }

    #[test]
    fn test_pagination_transitions() {
        let mut state = CandidatesPageState::default();
        state.previous_page();
        assert_eq!(state.params.page, 1);

        state.items = candidates(20);
        state.next_page();
        assert_eq!(state.params.page, 2);

        state.items = candidates(5);
        assert!(!state.can_go_next());
        state.next_page();
        assert_eq!(state.params.page, 2);

        state.form.q = "rust".into();
        state.apply_filters();
        assert_eq!(state.params.page, 1);
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut state = CandidatesPageState::default();
        let first = state.begin_request();
        let second = state.begin_request();

        assert_eq!(state.finish_request(first, Ok(candidates(3))), None);
        assert!(state.items.is_empty());
        assert!(state.loading);

        assert_eq!(state.finish_request(second, Ok(candidates(2))), None);
        assert_eq!(state.items.len(), 2);
        assert!(!state.loading);
    }

    #[test]
    fn test_fetch_sends_params() {
        let h = Harness::new();
        h.transport
            .respond(200, r#"{"items": [{"slug": "a"}, {"slug": "b"}]}"#);
        let vm = CandidatesViewModel::new(h.api.clone());
        let params = CandidateListParams {
            skill: Some("Rust".into()),
            page: 2,
            ..Default::default()
        };

        let items = block_on(vm.fetch(&params)).unwrap();

        assert_eq!(items.len(), 2);
        let query = h.transport.last_request().unwrap().query;
        assert!(query.contains(&("skill".to_string(), "Rust".to_string())));
        assert!(query.contains(&("page".to_string(), "2".to_string())));
    }

    #[test]
    fn test_fetch_error_message() {
        let h = Harness::new();
        h.transport.respond(500, "");
        let vm = CandidatesViewModel::new(h.api.clone());

        assert_eq!(
            block_on(vm.fetch(&CandidateListParams::default())),
            Err(LIST_FAILED.to_string())
        );
    }
}
