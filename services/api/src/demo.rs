use crate::infra::InMemoryAnalysisRepository;
use broker_readiness::error::AppError;
use broker_readiness::workflows::onboarding::{
    CplAwareness, CrmUsage, FollowUpClarity, GeographicFocusClarity, GrowthGoalClarity,
    MonthlySpend, OnboardingAnalysisService, OnboardingResponse, PricingComfort,
    ProductFocusClarity, RawOnboardingResponse, SpeedToContact, TeamSize, Timeline,
};
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also submit a malformed questionnaire to show intake rejection.
    #[arg(long)]
    pub(crate) include_invalid: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Broker readiness demo");

    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let service = OnboardingAnalysisService::new(repository);

    for (name, response) in sample_brokers() {
        match service.submit(RawOnboardingResponse::from(&response)) {
            Ok(record) => {
                let view = record.view();
                println!("\n{} [{}]", name, view.response_id.0);
                println!(
                    "- operational {} | budget {} | growth {} | intent {}",
                    view.operational_score,
                    view.budget_score,
                    view.growth_score,
                    view.intent_score
                );
                println!("- {}", view.briefing);
            }
            Err(err) => println!("\n{name}: submission rejected: {err}"),
        }
    }

    if args.include_invalid {
        let mut raw = RawOnboardingResponse::from(&sample_brokers()[0].1);
        raw.monthly_spend = Some("plenty".to_string());
        match service.submit(raw) {
            Ok(record) => println!("\nUnexpectedly accepted {}", record.response_id.0),
            Err(err) => println!("\nMalformed questionnaire rejected: {err}"),
        }
    }

    match service.recent(10) {
        Ok(records) => println!("\n{} analyses recorded this session", records.len()),
        Err(err) => println!("\nRecent analyses unavailable: {err}"),
    }

    Ok(())
}

fn sample_brokers() -> Vec<(&'static str, OnboardingResponse)> {
    let established = OnboardingResponse {
        crm_usage: CrmUsage::Full,
        speed_to_contact: SpeedToContact::FiveMinutes,
        team_size: TeamSize::Dedicated,
        follow_up_clarity: FollowUpClarity::Clear,
        monthly_spend: MonthlySpend::Over30k,
        cpl_awareness: CplAwareness::Yes,
        pricing_comfort: PricingComfort::Comfortable,
        desired_leads_weekly: 40,
        max_capacity_weekly: 50,
        product_focus_clarity: ProductFocusClarity::Clear,
        geographic_focus_clarity: GeographicFocusClarity::Clear,
        growth_goal_clarity: GrowthGoalClarity::Numeric,
        timeline: Timeline::Immediate,
    };

    let stretched = OnboardingResponse {
        team_size: TeamSize::Solo,
        monthly_spend: MonthlySpend::From5kTo15k,
        pricing_comfort: PricingComfort::Sensitive,
        desired_leads_weekly: 30,
        max_capacity_weekly: 10,
        ..established
    };

    let exploring = OnboardingResponse {
        crm_usage: CrmUsage::None,
        speed_to_contact: SpeedToContact::NextDay,
        team_size: TeamSize::Unclear,
        follow_up_clarity: FollowUpClarity::None,
        monthly_spend: MonthlySpend::Under5k,
        cpl_awareness: CplAwareness::No,
        pricing_comfort: PricingComfort::Flexible,
        desired_leads_weekly: 5,
        max_capacity_weekly: 0,
        product_focus_clarity: ProductFocusClarity::Unclear,
        geographic_focus_clarity: GeographicFocusClarity::Undefined,
        growth_goal_clarity: GrowthGoalClarity::Vague,
        timeline: Timeline::Exploring,
    };

    vec![
        ("Established team", established),
        ("Over-stretched solo broker", stretched),
        ("Early explorer", exploring),
    ]
}
