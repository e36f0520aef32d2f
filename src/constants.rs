/// Default base URL of the OneMap API
pub const DEFAULT_BASE_URL: &str = "https://developers.onemap.sg";
/// Default timeout in seconds applied to every request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// User agent string used in HTTP requests to identify this client to the OneMap API
pub const USER_AGENT: &str = "onemap-client/0.1.0";

/// Login endpoint exchanging email/password for a bearer token
pub const AUTH_ENDPOINT: &str = "/privateapi/auth/post/getToken";
/// Free-text search endpoint
pub const SEARCH_ENDPOINT: &str = "/commonapi/search";
/// Prefix of the coordinate conversion endpoints, followed by `{src}to{dst}`
pub const CONVERT_ENDPOINT: &str = "/commonapi/convert";
/// Reverse geocoding from WGS84 coordinates. Append `xy` for SVY21 input
pub const REVERSE_GEOCODE_ENDPOINT: &str = "/privateapi/commonsvc/revgeocode";
/// Every planning area polygon for a year
pub const ALL_PLANNING_AREAS_ENDPOINT: &str = "/privateapi/popapi/getAllPlanningarea";
/// Planning area names only
pub const PLANNING_AREA_NAMES_ENDPOINT: &str = "/privateapi/popapi/getPlanningareaNames";
/// Planning area containing a point
pub const PLANNING_AREA_ENDPOINT: &str = "/privateapi/popapi/getPlanningarea";
/// Prefix shared by all population statistics endpoints
pub const POPULATION_ENDPOINT: &str = "/privateapi/popapi";
/// Metadata of a single theme
pub const THEME_INFO_ENDPOINT: &str = "/privateapi/themesvc/getThemeInfo";
/// Metadata of all themes
pub const ALL_THEMES_INFO_ENDPOINT: &str = "/privateapi/themesvc/getAllThemesInfo";
/// Theme features, optionally restricted to a bounding box
pub const RETRIEVE_THEME_ENDPOINT: &str = "/privateapi/themesvc/retrieveTheme";
/// Routing endpoint
pub const ROUTE_ENDPOINT: &str = "/privateapi/routingsvc/route";

/// Default year for planning area queries
pub const DEFAULT_PLANNING_AREA_YEAR: u16 = 2014;
/// Default reverse geocoding buffer in metres
pub const DEFAULT_GEOCODE_BUFFER: u32 = 10;
/// Maximum buffer accepted by the reverse geocoding endpoint, in metres
pub const MAX_GEOCODE_BUFFER: u32 = 500;
/// Decimal places used when formatting bounding box extents
pub const EXTENTS_PRECISION: usize = 5;
/// Maximum number of itineraries the routing endpoint returns
pub const MAX_ITINERARIES: u8 = 3;
