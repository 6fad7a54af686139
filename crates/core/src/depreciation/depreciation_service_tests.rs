#[cfg(test)]
mod tests {
    use crate::depreciation::{
        DepreciationService, DepreciationServiceTrait, DepreciationStatus, YearMonth,
    };
    use crate::errors::{DatabaseError, DepreciationError, Error};
    use crate::test_support::{asset, MockAssetRepository};
    use crate::utils::FixedClock;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn service(rows: Vec<crate::assets::AssetRecord>) -> DepreciationService {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        DepreciationService::new(
            Arc::new(MockAssetRepository::new(rows)),
            Arc::new(FixedClock(today)),
        )
    }

    fn camera() -> crate::assets::AssetRecord {
        asset(
            "INV.RHF.001/XI/2020",
            "RMU",
            "Studio",
            1,
            dec!(12000000),
            dec!(250000),
            Some(2023),
            "Januari",
        )
    }

    #[test]
    fn test_evaluate_asset_uses_clock_today() {
        let svc = service(vec![camera()]);

        let view = svc.evaluate_asset("INV.RHF.001/XI/2020", None).unwrap();

        assert_eq!(view.status, DepreciationStatus::Depreciating);
        assert_eq!(view.progress_percent, 50);
        assert_eq!(view.formatted_book_value, "Rp 6.000.000");
        assert_eq!(view.formatted_acquisition_cost, "Rp 12.000.000");
        assert_eq!(view.formatted_monthly_depreciation, "Rp 250.000");
        assert_eq!(view.economic_life_years, Some(4));
        assert_eq!(view.result.end_date, Some(YearMonth { year: 2027, month: 1 }));
    }

    #[test]
    fn test_evaluate_asset_honours_explicit_date() {
        let svc = service(vec![camera()]);
        let as_of = NaiveDate::from_ymd_opt(2027, 6, 1).unwrap();

        let view = svc.evaluate_asset("INV.RHF.001/XI/2020", Some(as_of)).unwrap();

        assert_eq!(view.status, DepreciationStatus::FullyDepreciated);
        assert_eq!(view.result.book_value, Decimal::ZERO);
        assert_eq!(view.progress_percent, 100);
    }

    #[test]
    fn test_zero_rate_is_reported_as_invalid_not_depreciated() {
        let mut row = camera();
        row.monthly_depreciation = Decimal::ZERO;
        let svc = service(vec![row]);

        let view = svc.evaluate_asset("INV.RHF.001/XI/2020", None).unwrap();

        assert_eq!(view.status, DepreciationStatus::InvalidRate);
        assert_eq!(view.result.book_value, dec!(12000000));
        assert_eq!(view.progress_percent, 0);
    }

    #[test]
    fn test_unresolved_month_fails_evaluation() {
        let mut row = camera();
        row.purchase_month = "Sept".to_string();
        let svc = service(vec![row]);

        let err = svc.evaluate_asset("INV.RHF.001/XI/2020", None).unwrap_err();

        assert!(matches!(
            err,
            Error::Depreciation(DepreciationError::UnresolvedMonthName(_))
        ));
    }

    #[test]
    fn test_missing_purchase_year_fails_evaluation() {
        let mut row = camera();
        row.purchase_year = None;
        let svc = service(vec![row]);

        assert!(matches!(
            svc.evaluate_asset("INV.RHF.001/XI/2020", None),
            Err(Error::Depreciation(DepreciationError::MissingPurchaseYear(_)))
        ));
    }

    #[test]
    fn test_negative_sheet_values_are_rejected() {
        let mut row = camera();
        row.acquisition_cost = dec!(-1000);
        let svc = service(vec![row]);

        assert!(matches!(
            svc.evaluate_asset("INV.RHF.001/XI/2020", None),
            Err(Error::Depreciation(DepreciationError::NegativeAmount { .. }))
        ));
    }

    #[test]
    fn test_unknown_asset_is_not_found() {
        let svc = service(Vec::new());
        assert!(matches!(
            svc.evaluate_asset("INV.NONE", None),
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }
}
