//! Column mapping between sheet rows and asset records.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use inventaris_core::assets::AssetRecord;
use inventaris_core::constants::EMPTY_CELL;
use inventaris_core::utils::parse_sheet_number;

use crate::errors::StorageError;
use crate::sheet::{Sheet, SheetRow};

pub const COL_ASSET_NUMBER: &str = "Nomor Asset";
pub const COL_PLACEMENT: &str = "PENEMPATAN ASET";
pub const COL_SOURCE: &str = "Sumber";
pub const COL_NAME: &str = "Nama Asset";
pub const COL_ASSET_GROUP: &str = "Kelompok Aset";
pub const COL_OWNERSHIP: &str = "Kepemilikan";
pub const COL_QUANTITY: &str = "Qty";
pub const COL_DOCUMENTATION: &str = "Dokumentasi";
pub const COL_INVOICE: &str = "Invoice";
pub const COL_ACQUISITION_COST: &str = "Harga Perolehan";
pub const COL_PURCHASE_YEAR: &str = "Tahun Beli";
pub const COL_PURCHASE_MONTH: &str = "Bulan Beli";
pub const COL_ECONOMIC_LIFE: &str = "Umur Ekonomis";
pub const COL_MONTHLY_DEPRECIATION: &str = "Nilai Penyusutan per Bulan";
pub const COL_STATUS: &str = "Status";
pub const COL_LABEL: &str = "Label";

/// Yearly valuation columns kept from earlier bookkeeping. They are not
/// interpreted, only carried along.
pub const LEGACY_COLUMNS: [&str; 8] = [
    "VALUASI ASSET 2019",
    "VALUASI ASSET 2020",
    "VALUASI ASSET 2021",
    "VALUASI ASSET 2022",
    "VALUASI ASSET 2023",
    "VALUASI ASSET 2024",
    "VALUASI ASSET 2025",
    "Nilai Buku 2024",
];

/// Header written when a new sheet is created.
pub const CANONICAL_COLUMNS: [&str; 24] = [
    COL_ASSET_NUMBER,
    COL_PLACEMENT,
    COL_SOURCE,
    COL_NAME,
    COL_ASSET_GROUP,
    COL_OWNERSHIP,
    COL_QUANTITY,
    COL_DOCUMENTATION,
    COL_INVOICE,
    COL_ACQUISITION_COST,
    COL_PURCHASE_YEAR,
    COL_PURCHASE_MONTH,
    COL_ECONOMIC_LIFE,
    COL_MONTHLY_DEPRECIATION,
    LEGACY_COLUMNS[0],
    LEGACY_COLUMNS[1],
    LEGACY_COLUMNS[2],
    LEGACY_COLUMNS[3],
    LEGACY_COLUMNS[4],
    LEGACY_COLUMNS[5],
    LEGACY_COLUMNS[6],
    LEGACY_COLUMNS[7],
    COL_STATUS,
    COL_LABEL,
];

/// Named fields of [`AssetRecord`], matched against header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    AssetNumber,
    Placement,
    Source,
    Name,
    AssetGroup,
    Ownership,
    Quantity,
    Documentation,
    Invoice,
    AcquisitionCost,
    PurchaseYear,
    PurchaseMonth,
    EconomicLife,
    MonthlyDepreciation,
    Status,
    Label,
}

impl Field {
    fn from_header(header: &str) -> Option<Self> {
        let field = match header.trim() {
            COL_ASSET_NUMBER => Field::AssetNumber,
            COL_PLACEMENT => Field::Placement,
            COL_SOURCE => Field::Source,
            COL_NAME => Field::Name,
            COL_ASSET_GROUP => Field::AssetGroup,
            COL_OWNERSHIP => Field::Ownership,
            COL_QUANTITY => Field::Quantity,
            COL_DOCUMENTATION => Field::Documentation,
            COL_INVOICE => Field::Invoice,
            COL_ACQUISITION_COST => Field::AcquisitionCost,
            COL_PURCHASE_YEAR => Field::PurchaseYear,
            COL_PURCHASE_MONTH => Field::PurchaseMonth,
            COL_ECONOMIC_LIFE => Field::EconomicLife,
            COL_MONTHLY_DEPRECIATION => Field::MonthlyDepreciation,
            COL_STATUS => Field::Status,
            COL_LABEL => Field::Label,
            _ => return None,
        };
        Some(field)
    }
}

/// Resolved layout of a sheet header: which column holds which field.
#[derive(Debug, Clone)]
pub struct SheetColumns {
    headers: Vec<String>,
    fields: Vec<Option<Field>>,
}

impl SheetColumns {
    /// Resolves `headers`. Only the asset number column is mandatory.
    pub fn resolve(headers: &[String]) -> Result<Self, StorageError> {
        let fields: Vec<Option<Field>> = headers.iter().map(|h| Field::from_header(h)).collect();
        if !fields.contains(&Some(Field::AssetNumber)) {
            return Err(StorageError::MissingColumn(COL_ASSET_NUMBER.to_string()));
        }
        Ok(Self {
            headers: headers.to_vec(),
            fields,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Parses every data row of `sheet`.
    pub fn decode_sheet(&self, sheet: &Sheet) -> Result<Vec<AssetRecord>, StorageError> {
        sheet.rows.iter().map(|row| self.decode(row)).collect()
    }

    /// Parses one data row. Cells under unknown headers go to `extra_columns`.
    pub fn decode(&self, row: &SheetRow) -> Result<AssetRecord, StorageError> {
        let mut record = empty_record();

        for ((header, field), cell) in self.headers.iter().zip(&self.fields).zip(&row.cells) {
            let Some(field) = field else {
                record.extra_columns.insert(header.clone(), cell.clone());
                continue;
            };
            let fail = |message: String| StorageError::Parse {
                row: row.line,
                message: format!("{}: {}", header.trim(), message),
            };
            let text = cell.trim();
            match field {
                Field::AssetNumber => record.asset_number = text.to_string(),
                Field::Placement => record.placement = text.to_string(),
                Field::Source => record.source = text.to_string(),
                Field::Name => record.name = text.to_string(),
                Field::AssetGroup => record.asset_group = text.to_string(),
                Field::Ownership => record.ownership = text.to_string(),
                Field::Documentation => record.documentation_url = text.to_string(),
                Field::Invoice => record.invoice_url = text.to_string(),
                Field::PurchaseMonth => record.purchase_month = text.to_string(),
                Field::Status => record.status = text.to_string(),
                Field::Label => record.label = text.to_string(),
                Field::Quantity => {
                    record.quantity = parse_sheet_number(text).map_err(|e| fail(e.to_string()))?
                }
                Field::AcquisitionCost => {
                    record.acquisition_cost =
                        parse_sheet_number(text).map_err(|e| fail(e.to_string()))?
                }
                Field::MonthlyDepreciation => {
                    record.monthly_depreciation =
                        parse_sheet_number(text).map_err(|e| fail(e.to_string()))?
                }
                Field::PurchaseYear => {
                    record.purchase_year = parse_whole(text)
                        .map_err(&fail)?
                        .map(|y| y.to_i32().ok_or_else(|| fail(format!("'{}' is out of range", text))))
                        .transpose()?
                }
                Field::EconomicLife => {
                    record.economic_life_years = parse_whole(text)
                        .map_err(&fail)?
                        .map(|y| y.to_u32().ok_or_else(|| fail(format!("'{}' is out of range", text))))
                        .transpose()?
                }
            }
        }

        if record.asset_number.is_empty() {
            return Err(StorageError::Parse {
                row: row.line,
                message: format!("{} is empty", COL_ASSET_NUMBER),
            });
        }
        Ok(record)
    }

    /// Lays `record` out in header order. Unknown columns the record does not
    /// carry are written as the sheet's empty placeholder.
    pub fn encode(&self, record: &AssetRecord) -> Vec<String> {
        self.headers
            .iter()
            .zip(&self.fields)
            .map(|(header, field)| match field {
                None => record
                    .extra_columns
                    .get(header)
                    .cloned()
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
                Some(Field::AssetNumber) => record.asset_number.clone(),
                Some(Field::Placement) => record.placement.clone(),
                Some(Field::Source) => record.source.clone(),
                Some(Field::Name) => record.name.clone(),
                Some(Field::AssetGroup) => record.asset_group.clone(),
                Some(Field::Ownership) => record.ownership.clone(),
                Some(Field::Quantity) => number_cell(record.quantity),
                Some(Field::Documentation) => record.documentation_url.clone(),
                Some(Field::Invoice) => record.invoice_url.clone(),
                Some(Field::AcquisitionCost) => number_cell(record.acquisition_cost),
                Some(Field::PurchaseYear) => {
                    record.purchase_year.map(|y| y.to_string()).unwrap_or_default()
                }
                Some(Field::PurchaseMonth) => record.purchase_month.clone(),
                Some(Field::EconomicLife) => record
                    .economic_life_years
                    .map(|y| y.to_string())
                    .unwrap_or_default(),
                Some(Field::MonthlyDepreciation) => number_cell(record.monthly_depreciation),
                Some(Field::Status) => record.status.clone(),
                Some(Field::Label) => record.label.clone(),
            })
            .collect()
    }
}

/// Blank and placeholder cells are "not recorded"; anything else must be a
/// whole number (`2021` and `2021.0` are both accepted).
fn parse_whole(text: &str) -> Result<Option<Decimal>, String> {
    if text.is_empty() || text == EMPTY_CELL {
        return Ok(None);
    }
    let value = parse_sheet_number(text).map_err(|e| e.to_string())?;
    if value.fract() != Decimal::ZERO {
        return Err(format!("'{}' is not a whole number", text));
    }
    Ok(Some(value))
}

fn number_cell(value: Decimal) -> String {
    value.normalize().to_string()
}

fn empty_record() -> AssetRecord {
    AssetRecord {
        asset_number: String::new(),
        placement: String::new(),
        source: String::new(),
        name: String::new(),
        asset_group: String::new(),
        ownership: String::new(),
        quantity: Decimal::ZERO,
        documentation_url: String::new(),
        invoice_url: String::new(),
        acquisition_cost: Decimal::ZERO,
        purchase_year: None,
        purchase_month: String::new(),
        economic_life_years: None,
        monthly_depreciation: Decimal::ZERO,
        status: String::new(),
        label: String::new(),
        extra_columns: BTreeMap::new(),
    }
}
