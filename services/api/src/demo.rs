use crate::infra::{parse_locale, FailingSubmissionSink, InMemorySubmissionSink};
use catnet_intake::error::AppError;
use catnet_intake::i18n::{text, Locale};
use catnet_intake::workflows::assessment::{
    compose_report, AssessmentService, BasicInfoUpdate, BuildingType, DeliveryStatus,
    IntakeSession, ReportPage, ScoredQuestion, SubmissionSink,
};
use chrono::Local;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Locale for the printed report (zh or en)
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Simulate a webhook transport outage during submit
    #[arg(long)]
    pub(crate) fail_dispatch: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let locale = args.locale.unwrap_or_default();
    println!("Cat home safety intake demo");

    if args.fail_dispatch {
        let service = AssessmentService::new(Arc::new(FailingSubmissionSink));
        run_scripted_assessment(&service, locale).await?;
        return Ok(());
    }

    let sink = Arc::new(InMemorySubmissionSink::default());
    let service = AssessmentService::new(sink.clone());
    run_scripted_assessment(&service, locale).await?;

    let deliveries = sink.deliveries();
    println!("\nRecorded webhook deliveries: {}", deliveries.len());
    if let Some(payload) = deliveries.first() {
        match serde_json::to_string_pretty(payload) {
            Ok(json) => println!("Submission payload:\n{json}"),
            Err(err) => println!("Submission payload unavailable: {err}"),
        }
    }

    Ok(())
}

async fn run_scripted_assessment<S>(
    service: &AssessmentService<S>,
    locale: Locale,
) -> Result<(), AppError>
where
    S: SubmissionSink + 'static,
{
    let mut session = IntakeSession::new(locale);

    session.update_basic(BasicInfoUpdate {
        address: Some("Flat 12B, Harbour View Court".to_string()),
        building_type: Some(BuildingType::Apartment),
        floor_level: Some("15".to_string()),
        window_count: Some("6".to_string()),
        door_count: Some("2".to_string()),
        heaviest_cat_weight: Some("5.5".to_string()),
    })?;
    session.advance()?;

    for (question, value) in [
        (ScoredQuestion::CatCount, 2),
        (ScoredQuestion::WindowBehavior, 3),
        (ScoredQuestion::WindowStructure, 2),
        (ScoredQuestion::Personality, 3),
        (ScoredQuestion::Environment, 1),
        (ScoredQuestion::Expectation, 2),
    ] {
        session.answer(question, value)?;
    }
    session.advance()?;

    let receipt = service.submit(&mut session).await?;

    println!("\nSubmission receipt");
    println!("- score {} / {}", receipt.total_score, receipt.max_score);
    println!(
        "- tier {} {}",
        receipt.tier.token(),
        text(locale, receipt.tier.banner_key())
    );
    match &receipt.delivery {
        DeliveryStatus::Delivered => println!("- webhook delivery: ok"),
        DeliveryStatus::Failed { reason } => {
            println!("- webhook delivery failed (non-fatal): {reason}")
        }
    }

    let assessment = session.finalize(service.scoring())?;
    let report = compose_report(
        &assessment,
        locale,
        service.scoring(),
        Local::now().date_naive(),
    );
    println!(
        "\nComposed report: {} pages -> {}",
        report.page_count(),
        report.file_name
    );
    for (index, page) in report.pages.iter().enumerate() {
        render_page(index + 1, page);
    }

    Ok(())
}

fn render_page(number: usize, page: &ReportPage) {
    match page {
        ReportPage::Summary(summary) => {
            println!("\nPage {number}: {}", summary.title);
            println!(
                "{} {} | {} {}/{}",
                summary.date_label, summary.date, summary.tier_label, summary.total_score,
                summary.max_score
            );
            println!("{} {}", summary.assessment_heading, summary.assessment);
            println!("{} {}", summary.recommendation_heading, summary.recommendation);
            println!("{} {}", summary.advice_heading, summary.advice);
            println!("{}", summary.basic_info_heading);
            for row in &summary.basic_info {
                println!("- {}: {}", row.label, row.value);
            }
            println!("{}", summary.score_heading);
            for row in &summary.scores {
                let marker = if row.flagged { " [!]" } else { "" };
                println!("- {}: {} {}{}", row.label, row.value, row.unit, marker);
            }
        }
        ReportPage::BreedReference(breeds) => {
            println!("\nPage {number}: {}", breeds.title);
            for group in &breeds.groups {
                println!("- {}: {}", group.title, group.breeds.join(", "));
            }
        }
        ReportPage::MultiCatReference(households) => {
            println!("\nPage {number}: {}", households.title);
            for section in &households.sections {
                println!("- {}", section.title);
                for point in &section.points {
                    println!("  - {point}");
                }
            }
        }
        ReportPage::ImpactReference(impact) => {
            println!("\nPage {number}: {}", impact.title);
            println!("{}", impact.basis);
            for row in &impact.rows {
                println!(
                    "- {} | {} | {} | {}",
                    row.behavior, row.multiplier, row.impact, row.description
                );
            }
        }
    }
}
