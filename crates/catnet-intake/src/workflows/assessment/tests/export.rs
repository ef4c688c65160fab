use std::sync::Mutex;

use chrono::NaiveDate;

use super::common::*;
use crate::i18n::Locale;
use crate::workflows::assessment::export::{
    export_document, DocumentAssembler, ExportError, ExportedDocument, PageImage, PageRasterizer,
};
use crate::workflows::assessment::report::{compose_report, ReportDocument, ReportPage};
use crate::workflows::assessment::scoring::ScoringConfig;

const PAGE_WIDTH_PX: u32 = 1190;

/// Deterministic stand-in for the real rasterizer: fixed width, height
/// proportional to the page number so assembly order is observable.
struct FixedScaleRasterizer;

impl PageRasterizer for FixedScaleRasterizer {
    fn rasterize(&self, page_number: usize, page: &ReportPage) -> Result<PageImage, ExportError> {
        Ok(PageImage {
            page_number,
            width_px: PAGE_WIDTH_PX,
            height_px: 1600 + page_number as u32,
            bytes: page.kind().as_bytes().to_vec(),
        })
    }
}

struct FailingRasterizer {
    fail_on: usize,
}

impl PageRasterizer for FailingRasterizer {
    fn rasterize(&self, page_number: usize, page: &ReportPage) -> Result<PageImage, ExportError> {
        if page_number == self.fail_on {
            return Err(ExportError::Rasterize {
                page: page_number,
                reason: "canvas unavailable".to_string(),
            });
        }
        FixedScaleRasterizer.rasterize(page_number, page)
    }
}

#[derive(Default)]
struct RecordingAssembler {
    received: Mutex<Vec<usize>>,
}

impl DocumentAssembler for RecordingAssembler {
    fn assemble(
        &self,
        file_name: &str,
        pages: Vec<PageImage>,
    ) -> Result<ExportedDocument, ExportError> {
        let mut received = self.received.lock().expect("assembler mutex poisoned");
        received.extend(pages.iter().map(|page| page.page_number));

        let bytes = pages.iter().flat_map(|page| page.bytes.clone()).collect();
        Ok(ExportedDocument {
            file_name: file_name.to_string(),
            page_count: pages.len(),
            bytes,
        })
    }
}

fn sample_report() -> ReportDocument {
    let session = confirmed_session(Locale::Zh);
    let assessment = session
        .finalize(&ScoringConfig::default())
        .expect("finalizes");
    compose_report(
        &assessment,
        Locale::Zh,
        &ScoringConfig::default(),
        NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date"),
    )
}

#[test]
fn pages_are_rasterized_and_assembled_in_document_order() {
    let report = sample_report();
    let assembler = RecordingAssembler::default();

    let document = export_document(&report, &FixedScaleRasterizer, &assembler)
        .expect("export succeeds");

    assert_eq!(document.page_count, 4);
    assert_eq!(document.file_name, report.file_name);
    assert_eq!(
        *assembler.received.lock().expect("assembler mutex poisoned"),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn a_rasterizer_failure_aborts_before_assembly() {
    let report = sample_report();
    let assembler = RecordingAssembler::default();

    let result = export_document(&report, &FailingRasterizer { fail_on: 3 }, &assembler);

    match result {
        Err(ExportError::Rasterize { page, .. }) => assert_eq!(page, 3),
        other => panic!("expected rasterize error, got {other:?}"),
    }
    assert!(assembler
        .received
        .lock()
        .expect("assembler mutex poisoned")
        .is_empty());
}
