/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::services::{
    CommonService, CommonServiceImpl, PlanningAreaService, PlanningAreaServiceImpl,
    PopulationService, PopulationServiceImpl, RoutingService, RoutingServiceImpl, ThemeService,
    ThemeServiceImpl,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    ConvertRequest, ReverseGeocodeRequest, RouteRequest, SearchRequest, TransitOptions,
};
use crate::presentation::geometry::BoundingBox;
use crate::presentation::population::{Gender, PopulationDataType};
use crate::presentation::routing::RouteType;
use crate::presentation::theme::ThemeResults;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Entry point of the library
///
/// Every service shares one [`HttpClient`], and with it one authentication
/// state: logging in through any of them logs in all of them. `Client` is
/// `Send + Sync` and can be shared across tasks behind an `Arc`.
pub struct Client {
    http_client: Arc<HttpClient>,
    common: CommonServiceImpl,
    planning_areas: PlanningAreaServiceImpl,
    population: PopulationServiceImpl,
    themes: ThemeServiceImpl,
    router: RoutingServiceImpl,
}

impl Client {
    /// Creates a client and logs in immediately
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.authenticate().await?;
        Ok(client)
    }

    /// Creates a client that logs in on its first request
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        info!("OneMap client created for {}", http_client.config().rest_api.base_url);

        Ok(Self {
            common: CommonServiceImpl::new(http_client.clone()),
            planning_areas: PlanningAreaServiceImpl::new(http_client.clone()),
            population: PopulationServiceImpl::new(http_client.clone()),
            themes: ThemeServiceImpl::new(http_client.clone()),
            router: RoutingServiceImpl::new(http_client.clone()),
            http_client,
        })
    }

    /// Logs in unless a session already exists
    pub async fn authenticate(&self) -> Result<(), AppError> {
        self.auth().ensure_authenticated().await.map(|_| ())
    }

    /// Whether a token has been obtained
    pub async fn is_authenticated(&self) -> bool {
        self.auth().is_authenticated().await
    }

    /// Current bearer token, if any
    pub async fn token(&self) -> Option<String> {
        self.auth().token().await
    }

    /// Shared authentication state
    pub fn auth(&self) -> &Arc<Auth> {
        self.http_client.auth()
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Search, conversion and reverse geocoding
    pub fn common(&self) -> &CommonServiceImpl {
        &self.common
    }

    /// Planning areas
    pub fn planning_areas(&self) -> &PlanningAreaServiceImpl {
        &self.planning_areas
    }

    /// Population statistics
    pub fn population(&self) -> &PopulationServiceImpl {
        &self.population
    }

    /// Themes
    pub fn themes(&self) -> &ThemeServiceImpl {
        &self.themes
    }

    /// Routing
    pub fn router(&self) -> &RoutingServiceImpl {
        &self.router
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new_lazy(Config::default()).expect("failed to build the HTTP client")
    }
}

#[async_trait]
impl CommonService for Client {
    async fn search(&self, request: &SearchRequest) -> Result<Value, AppError> {
        self.common.search(request).await
    }

    async fn convert_coordinates(&self, request: &ConvertRequest) -> Result<Value, AppError> {
        self.common.convert_coordinates(request).await
    }

    async fn reverse_geocode(&self, request: &ReverseGeocodeRequest) -> Result<Value, AppError> {
        self.common.reverse_geocode(request).await
    }
}

#[async_trait]
impl PlanningAreaService for Client {
    async fn get_all_planning_areas(
        &self,
        year: Option<u16>,
        names_only: bool,
    ) -> Result<Value, AppError> {
        self.planning_areas
            .get_all_planning_areas(year, names_only)
            .await
    }

    async fn find_planning_area(
        &self,
        lat: f64,
        lng: f64,
        year: Option<u16>,
    ) -> Result<Value, AppError> {
        self.planning_areas.find_planning_area(lat, lng, year).await
    }
}

#[async_trait]
impl PopulationService for Client {
    async fn get_population_data(
        &self,
        data_type: PopulationDataType,
        year: u16,
        planning_area: &str,
    ) -> Result<Value, AppError> {
        self.population
            .get_population_data(data_type, year, planning_area)
            .await
    }

    async fn get_population_by_gender(
        &self,
        data_type: PopulationDataType,
        year: u16,
        planning_area: &str,
        gender: Option<Gender>,
    ) -> Result<Value, AppError> {
        self.population
            .get_population_by_gender(data_type, year, planning_area, gender)
            .await
    }
}

#[async_trait]
impl ThemeService for Client {
    async fn get_theme_info(&self, theme_name: &str) -> Result<Value, AppError> {
        self.themes.get_theme_info(theme_name).await
    }

    async fn get_all_themes_info(&self, more_info: bool) -> Result<Value, AppError> {
        self.themes.get_all_themes_info(more_info).await
    }

    async fn retrieve_theme(
        &self,
        theme: &str,
        bbox: Option<BoundingBox>,
    ) -> Result<ThemeResults, AppError> {
        self.themes.retrieve_theme(theme, bbox).await
    }

    async fn get_list_of_available_themes(&self) -> Result<Vec<String>, AppError> {
        self.themes.get_list_of_available_themes().await
    }
}

#[async_trait]
impl RoutingService for Client {
    async fn route(&self, request: &RouteRequest) -> Result<Value, AppError> {
        self.router.route(request).await
    }

    async fn route_from_postal(
        &self,
        start_postal: &str,
        end_postal: &str,
        route_type: RouteType,
        transit: Option<TransitOptions>,
    ) -> Result<Value, AppError> {
        self.router
            .route_from_postal(start_postal, end_postal, route_type, transit)
            .await
    }
}
