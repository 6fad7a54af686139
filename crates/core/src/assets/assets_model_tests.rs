//! Tests for asset domain models and the browse filter.

#[cfg(test)]
mod tests {
    use crate::assets::{AssetFilter, AssetStatus, AssetUpdate, NewAsset};
    use crate::depreciation::PurchaseMonth;
    use crate::errors::{DepreciationError, Error, ValidationError};
    use crate::test_support::asset;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn new_camera() -> NewAsset {
        NewAsset {
            asset_number: " INV.RHF.001/XI/2020 ".to_string(),
            placement: "Studio A".to_string(),
            source: "CC Rhaya".to_string(),
            name: "Sony FX3".to_string(),
            asset_group: "Kelompok I".to_string(),
            ownership: "RMU".to_string(),
            quantity: 1,
            documentation_url: String::new(),
            invoice_url: String::new(),
            acquisition_cost: dec!(12000000),
            purchase_year: 2023,
            purchase_month: PurchaseMonth::January,
            economic_life_years: None,
            annual_depreciation_percent: dec!(25),
            status: None,
        }
    }

    fn camera_update() -> AssetUpdate {
        AssetUpdate {
            placement: "Gudang".to_string(),
            source: "CC Rhaya".to_string(),
            name: "Sony FX3 Body".to_string(),
            asset_group: "Kelompok I".to_string(),
            ownership: "LDR".to_string(),
            quantity: dec!(2),
            documentation_url: String::new(),
            invoice_url: String::new(),
            acquisition_cost: dec!(12000000),
            purchase_year: 2023,
            purchase_month: "Februari".to_string(),
            economic_life_years: 8,
            monthly_depreciation: dec!(125000),
            status: "Missing".to_string(),
            label: "FALSE".to_string(),
        }
    }

    #[test]
    fn test_new_asset_derives_monthly_depreciation() {
        assert_eq!(new_camera().monthly_depreciation(), dec!(250000));

        let mut eight_years = new_camera();
        eight_years.annual_depreciation_percent = dec!(12.5);
        assert_eq!(eight_years.monthly_depreciation(), dec!(125000));
    }

    #[test]
    fn test_new_asset_into_record_defaults() {
        let record = new_camera().into_record();
        assert_eq!(record.asset_number, "INV.RHF.001/XI/2020");
        assert_eq!(record.purchase_month, "Januari");
        assert_eq!(record.purchase_year, Some(2023));
        assert_eq!(record.economic_life_years, Some(4));
        assert_eq!(record.status, "Available");
        assert_eq!(record.label, "TRUE");
        assert_eq!(record.quantity, Decimal::ONE);
        assert!(record.extra_columns.is_empty());
    }

    #[test]
    fn test_new_asset_requires_asset_number() {
        let mut input = new_camera();
        input.asset_number = "   ".to_string();
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref f)) if f == "assetNumber"
        ));
    }

    #[test]
    fn test_new_asset_rejects_out_of_range_values() {
        let mut input = new_camera();
        input.acquisition_cost = dec!(-5);
        assert!(input.validate().is_err());

        let mut input = new_camera();
        input.quantity = 0;
        assert!(input.validate().is_err());

        let mut input = new_camera();
        input.purchase_year = 1850;
        assert!(input.validate().is_err());

        let mut input = new_camera();
        input.economic_life_years = Some(51);
        assert!(input.validate().is_err());

        let mut input = new_camera();
        input.annual_depreciation_percent = Decimal::ZERO;
        assert!(input.validate().is_err());

        assert!(new_camera().validate().is_ok());
    }

    #[test]
    fn test_new_asset_deserializes_sheet_month_name() {
        let input: NewAsset = serde_json::from_value(json!({
            "assetNumber": "INV.RHF.002",
            "quantity": 3,
            "acquisitionCost": 3000000,
            "purchaseYear": 2024,
            "purchaseMonth": "Agustus",
            "economicLifeYears": 8,
            "annualDepreciationPercent": 12.5,
            "status": "Unlabeled"
        }))
        .unwrap();
        assert_eq!(input.purchase_month, PurchaseMonth::August);
        assert_eq!(input.status, Some(AssetStatus::Unlabeled));
        assert_eq!(input.placement, "");
    }

    #[test]
    fn test_update_keeps_number_and_extra_columns() {
        let mut record = new_camera().into_record();
        record
            .extra_columns
            .insert("VALUASI ASSET 2024".to_string(), "9000000".to_string());

        camera_update().apply_to(&mut record).unwrap();

        assert_eq!(record.asset_number, "INV.RHF.001/XI/2020");
        assert_eq!(record.ownership, "LDR");
        assert_eq!(record.purchase_month, "Februari");
        assert_eq!(record.monthly_depreciation, dec!(125000));
        assert_eq!(
            record.extra_columns.get("VALUASI ASSET 2024").map(String::as_str),
            Some("9000000")
        );
    }

    #[test]
    fn test_update_rejects_negative_depreciation() {
        let mut update = camera_update();
        update.monthly_depreciation = dec!(-1);
        assert!(update.validate().is_err());
        assert!(camera_update().validate().is_ok());
    }

    #[test]
    fn test_update_checks_month_name_and_economic_life() {
        let mut update = camera_update();
        update.purchase_month = "Agst".to_string();
        assert!(matches!(
            update.validate(),
            Err(Error::Depreciation(DepreciationError::UnresolvedMonthName(ref name))) if name == "Agst"
        ));

        let mut update = camera_update();
        update.economic_life_years = 51;
        assert!(matches!(
            update.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));

        let mut update = camera_update();
        update.economic_life_years = 0;
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_update_stores_sheet_month_name() {
        let mut record = new_camera().into_record();
        let mut update = camera_update();
        update.purchase_month = "february".to_string();
        update.validate().unwrap();
        update.apply_to(&mut record).unwrap();
        assert_eq!(record.purchase_month, "Februari");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = AssetFilter::default();
        let rows = vec![
            asset("A", "RMU", "Studio", 1, dec!(100), dec!(10), Some(2020), "Mei"),
            asset("B", "LDR", "Gudang", 1, dec!(200), dec!(10), None, ""),
        ];
        assert!(filter.is_empty());
        assert_eq!(filter.apply(rows).len(), 2);
    }

    #[test]
    fn test_filter_combines_selections_and_ranges() {
        let rows = vec![
            asset("A", "RMU", "Studio", 1, dec!(1000000), dec!(10), Some(2020), "Mei"),
            asset("B", "LDR", "Studio", 1, dec!(5000000), dec!(10), Some(2022), "Juni"),
            asset("C", "RMU", "Gudang", 1, dec!(8000000), dec!(10), Some(2024), "Mei"),
            asset("D", "RMU", "Studio", 1, dec!(3000000), dec!(10), None, "Mei"),
        ];

        let filter = AssetFilter {
            ownerships: vec!["RMU".to_string()],
            min_purchase_year: Some(2019),
            max_purchase_year: Some(2024),
            max_acquisition_cost: Some(dec!(8000000)),
            ..Default::default()
        };
        let numbers: Vec<_> = filter
            .apply(rows.clone())
            .into_iter()
            .map(|a| a.asset_number)
            .collect();
        assert_eq!(numbers, vec!["A", "C"]);

        let filter = AssetFilter {
            placements: vec!["Studio".to_string()],
            purchase_months: vec!["Mei".to_string(), "Juni".to_string()],
            min_acquisition_cost: Some(dec!(2000000)),
            ..Default::default()
        };
        let numbers: Vec<_> = filter
            .apply(rows)
            .into_iter()
            .map(|a| a.asset_number)
            .collect();
        assert_eq!(numbers, vec!["B", "D"]);
    }
}
