use onemap_client::prelude::*;

#[test]
fn test_population_table_covers_every_category() {
    let expected = [
        ("economic", "getEconomicStatus"),
        ("education", "getEducationAttending"),
        ("ethnicity", "getEthnicGroup"),
        ("household_income_from_work", "getHouseholdMonthlyIncomeWork"),
        ("household_size", "getHouseholdSize"),
        ("household_structure", "getHouseholdStructure"),
        ("income_from_work", "getIncomeFromWork"),
        ("industry", "getIndustry"),
        ("language_literacy", "getLanguageLiterate"),
        ("marital", "getMaritalStatus"),
        ("mode_transport_school", "getModeOfTransportSchool"),
        ("mode_transport_work", "getModeOfTransportWork"),
        ("occupation", "getOccupation"),
        ("age", "getPopulationAgeGroup"),
        ("religion", "getReligion"),
        ("spoken_language", "getSpokenAtHome"),
        ("tenancy", "getTenancy"),
        ("dwelling_type_household", "getTypeOfDwellingHousehold"),
        ("dwelling_type_population", "getTypeOfDwellingPop"),
    ];

    assert_eq!(PopulationDataType::all().len(), expected.len());
    for (name, endpoint) in expected {
        let data_type: PopulationDataType = name.parse().unwrap();
        assert_eq!(data_type.endpoint(), endpoint);
        assert_eq!(data_type.to_string(), name);
    }
}

#[test]
fn test_unknown_names_list_supported_values() {
    let err = "teleport".parse::<RouteType>().unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("invalid input: unsupported route type `teleport`"));
    assert!(message.contains("walk, drive, cycle, pt"));

    assert!(matches!("FERRY".parse::<TransitMode>(), Err(AppError::Validation(_))));
    assert!(matches!("EPSG4326".parse::<Crs>(), Err(AppError::Validation(_))));
    assert!(matches!("other".parse::<Gender>(), Err(AppError::Validation(_))));
    assert!(matches!("condo".parse::<AddressType>(), Err(AppError::Validation(_))));
}

#[test]
fn test_names_parse_case_insensitively_where_the_api_does() {
    assert_eq!("PT".parse::<RouteType>().unwrap(), RouteType::PublicTransport);
    assert_eq!("rail".parse::<TransitMode>().unwrap(), TransitMode::Rail);
    assert_eq!("svy21".parse::<Crs>().unwrap(), Crs::Svy21);
    assert_eq!("hdb".parse::<AddressType>().unwrap(), AddressType::Hdb);
    assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
}

#[test]
fn test_gender_support() {
    let with_gender: Vec<_> = PopulationDataType::all()
        .iter()
        .filter(|data_type| data_type.supports_gender())
        .map(|data_type| data_type.as_str())
        .collect();
    assert_eq!(with_gender, vec!["economic", "ethnicity", "marital"]);
}

#[test]
fn test_crs_codes() {
    assert_eq!(Crs::Wgs84.epsg(), "4326");
    assert_eq!(Crs::Svy21.epsg(), "3414");
    assert_eq!(Crs::Epsg3857.epsg(), "3857");
    assert!(!Crs::Wgs84.is_projected());
    assert!(Crs::Epsg3857.is_projected());
}
