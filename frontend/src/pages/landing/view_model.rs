use super::{repository::LandingRepository, utils};
use crate::{
    api::{ApiClient, ApiResult, Product, SignupRequest, SignupResponse, StoreMap},
    content::{use_site_content, SiteContent},
    state::toast::{use_toasts, Toast, ToastState},
    utils::{location, utm::UtmParams},
};
use leptos::*;
use log::{debug, warn};
use std::rc::Rc;

/// Overrides `window.location.search` as the source of UTM parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery(pub String);

#[derive(Clone, Copy)]
pub struct SignupFormState {
    pub nickname: RwSignal<String>,
    pub email: RwSignal<String>,
    pub state: RwSignal<String>,
}

impl SignupFormState {
    pub fn new() -> Self {
        Self {
            nickname: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            state: create_rw_signal(String::new()),
        }
    }

    pub fn snapshot(&self) -> utils::SignupFields {
        utils::SignupFields {
            nickname: self.nickname.get_untracked(),
            email: self.email.get_untracked(),
            state: self.state.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.nickname.set(String::new());
        self.email.set(String::new());
        self.state.set(String::new());
    }
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct LandingViewModel {
    pub form: SignupFormState,
    pub is_loading: RwSignal<bool>,
    pub products: RwSignal<Vec<Product>>,
    pub store_locations: RwSignal<StoreMap>,
    pub lookup_state: RwSignal<String>,
    pub lookup_result: RwSignal<Option<Vec<String>>>,
    pub submit_action: Action<SignupRequest, ApiResult<SignupResponse>>,
    pub lookup_action: Action<String, Vec<String>>,
    pub toasts: ToastState,
    content: StoredValue<SiteContent>,
    query_override: StoredValue<Option<String>>,
}

impl LandingViewModel {
    pub fn states(&self) -> &'static [&'static str] {
        self.content.with_value(|content| content.states)
    }

    /// Products to render: remote catalog if it has entries, otherwise the built-in three.
    pub fn displayed_products(&self) -> Vec<Product> {
        let remote = self.products.get();
        self.content
            .with_value(|content| utils::products_or_default(&remote, &content.products))
    }

    pub fn displayed_store_locations(&self) -> StoreMap {
        let remote = self.store_locations.get();
        self.content
            .with_value(|content| utils::stores_or_default(&remote, &content.store_locations))
    }

    fn page_query(&self) -> String {
        self.query_override
            .get_value()
            .or_else(location::current_search)
            .unwrap_or_default()
    }

    /// Idle -> Submitting. Missing fields short-circuit with a notification and no request.
    pub fn submit(&self) {
        let fields = self.form.snapshot();
        if let Err(err) = fields.validate() {
            self.toasts.push(Toast::destructive(err.error));
            return;
        }
        let utm = UtmParams::from_query(&self.page_query());
        self.is_loading.set(true);
        self.submit_action.dispatch(fields.into_request(utm));
    }

    pub fn lookup(&self) {
        let state = self.lookup_state.get_untracked();
        if state.is_empty() {
            return;
        }
        self.lookup_action.dispatch(state);
    }
}

/// Submitting -> Idle, with the form cleared only on success.
fn apply_signup_outcome(
    result: &ApiResult<SignupResponse>,
    form: SignupFormState,
    is_loading: RwSignal<bool>,
    toasts: ToastState,
) {
    match result {
        Ok(response) => {
            toasts.push(utils::success_toast(response));
            form.reset();
        }
        Err(err) => toasts.push(utils::failure_toast(err)),
    }
    is_loading.set(false);
}

fn load_initial_content(
    repository: &LandingRepository,
    products: RwSignal<Vec<Product>>,
    store_locations: RwSignal<StoreMap>,
) {
    let repo_products = repository.clone();
    spawn_local(async move {
        match repo_products.fetch_products().await {
            Ok(list) => {
                debug!("Loaded {} products", list.len());
                products.set(list);
            }
            Err(err) => warn!("Using built-in products: {}", err),
        }
    });

    let repo_stores = repository.clone();
    spawn_local(async move {
        match repo_stores.fetch_stores().await {
            Ok(map) => {
                debug!("Loaded store locations for {} regions", map.len());
                store_locations.set(map);
            }
            Err(err) => warn!("Using built-in store locations: {}", err),
        }
    });
}

pub fn use_landing_view_model() -> LandingViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LandingRepository::new_with_client(Rc::new(api));
    let content = use_site_content();
    let toasts = use_toasts();
    let query_override = use_context::<PageQuery>().map(|query| query.0);

    let form = SignupFormState::new();
    let is_loading = create_rw_signal(false);
    let products = create_rw_signal(Vec::<Product>::new());
    let store_locations = create_rw_signal(StoreMap::new());
    let lookup_state = create_rw_signal(String::new());
    let lookup_result = create_rw_signal(None::<Vec<String>>);

    load_initial_content(&repository, products, store_locations);

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |request: &SignupRequest| {
        let repo = repo_for_submit.clone();
        let request = request.clone();
        async move {
            let result = repo.signup(&request).await;
            apply_signup_outcome(&result, form, is_loading, toasts);
            result
        }
    });

    let repo_for_lookup = repository.clone();
    let lookup_defaults = store_value(content.store_locations.clone());
    let lookup_action = create_action(move |state: &String| {
        let repo = repo_for_lookup.clone();
        let state = state.clone();
        async move {
            let result = repo.fetch_stores_by_state(&state).await;
            if let Err(err) = &result {
                warn!("Store lookup for {} fell back to defaults: {}", state, err);
            }
            let outlets = lookup_defaults
                .with_value(|defaults| utils::stores_for_state(&state, result, defaults));
            lookup_result.set(Some(outlets.clone()));
            outlets
        }
    });

    LandingViewModel {
        form,
        is_loading,
        products,
        store_locations,
        lookup_state,
        lookup_result,
        submit_action,
        lookup_action,
        toasts,
        content: store_value(content),
        query_override: store_value(query_override),
    }
}
