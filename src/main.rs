use clap::Parser;
use fleet_lease_rust::{cli, error, fetch, inventory, profile, render};

use cli::{Cli, Commands};
use dialoguer::{Confirm, Input};
use error::{FleetError, Result};
use fetch::SheetClient;
use fleet_lease_common::{
    compute, AgeBucket, DepositBucket, FeeBucket, FilterState, MileageBucket, SortDirection,
    SortState, Term,
};
use indicatif::ProgressBar;
use inventory::Inventory;
use profile::ManagerProfile;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            search,
            filters,
            term,
            fee_buckets,
            deposit_buckets,
            mileage_buckets,
            age_buckets,
            sort,
            asc,
            limit,
        } => {
            println!("🚗 fleet-lease - 매물 조회\n");

            let inventory = load_inventory(cli.url).await;
            println!("✔ {}건 로드\n", inventory.len());

            let filter = build_filter(
                search,
                &filters,
                &term,
                fee_buckets,
                deposit_buckets,
                mileage_buckets,
                age_buckets,
            )?;
            let sort_state = SortState {
                key: sort,
                direction: if asc {
                    SortDirection::Ascending
                } else {
                    SortDirection::Descending
                },
            };

            let today = chrono::Local::now().date_naive();
            let rows = compute(inventory.records(), &filter, &sort_state, today);

            println!("매물: {}건", rows.len());
            render::print_table(&rows, &term, limit);
        }

        Commands::Show {
            vehicle_no,
            share,
            term,
        } => {
            let inventory = load_inventory(cli.url).await;
            let record = inventory
                .find_by_vehicle_no(&vehicle_no)
                .ok_or_else(|| FleetError::VehicleNotFound(vehicle_no.clone()))?;

            if share {
                let profile = ManagerProfile::load()?;
                println!("{}", render::share_text(record, term, &profile));
            } else {
                print!("{}", render::detail_text(record));
            }
        }

        Commands::Export { output, term } => {
            println!("📄 fleet-lease - 엑셀 내보내기\n");

            let columns = render::display_columns(&term);
            let refs: Vec<&str> = columns.iter().map(String::as_str).collect();
            let buffer = fleet_lease_common::export::generate_header_stub(&refs)
                .map_err(FleetError::ExcelGeneration)?;

            let path = output.unwrap_or_else(|| PathBuf::from("매물목록.xlsx"));
            std::fs::write(&path, buffer)?;
            println!("✔ 엑셀 저장: {}", path.display());
        }

        Commands::Profile { edit } => {
            let mut profile = ManagerProfile::load()?;

            if edit {
                profile.company_name = Input::new()
                    .with_prompt("회사명")
                    .with_initial_text(profile.company_name.clone())
                    .allow_empty(true)
                    .interact_text()?;
                profile.manager_name = Input::new()
                    .with_prompt("담당자 이름")
                    .with_initial_text(profile.manager_name.clone())
                    .allow_empty(true)
                    .interact_text()?;
                profile.manager_title = Input::new()
                    .with_prompt("직함")
                    .with_initial_text(profile.manager_title.clone())
                    .allow_empty(true)
                    .interact_text()?;
                profile.phone = Input::new()
                    .with_prompt("연락처")
                    .with_initial_text(profile.phone.clone())
                    .allow_empty(true)
                    .interact_text()?;
                profile.include_bank_account = Confirm::new()
                    .with_prompt("전달용 텍스트에 입금계좌 포함")
                    .default(profile.include_bank_account)
                    .interact()?;

                profile.save()?;
                println!("✔ 담당자 정보를 저장했습니다");
            } else if profile.is_unset() {
                println!("담당자 정보가 없습니다. `fleet-lease profile --edit` 로 입력하세요");
            } else {
                println!("담당자 정보:");
                println!("  회사명: {}", profile.company_name);
                println!("  담당자: {} {}", profile.manager_name, profile.manager_title);
                println!("  연락처: {}", profile.phone);
                println!(
                    "  입금계좌 포함: {}",
                    if profile.include_bank_account { "예" } else { "아니오" }
                );
            }
        }
    }

    Ok(())
}

/// 시트를 불러와 보관소를 채운다. 조회 실패는 보관소가 흡수한다
async fn load_inventory(url: Option<String>) -> Inventory {
    let client = SheetClient::new(url);
    let mut inventory = Inventory::new();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("시트 불러오는 중...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    inventory.refresh(&client).await;
    spinner.finish_and_clear();
    inventory
}

/// CLI 인자를 필터 상태로 조립한다
fn build_filter(
    search: Option<String>,
    filters: &[String],
    terms: &[Term],
    fee_buckets: Vec<FeeBucket>,
    deposit_buckets: Vec<DepositBucket>,
    mileage_buckets: Vec<MileageBucket>,
    age_buckets: Vec<AgeBucket>,
) -> Result<FilterState> {
    let mut state = FilterState::new();
    state.search = search.unwrap_or_default();

    for pair in filters {
        let (column, value) = pair.split_once('=').ok_or_else(|| {
            FleetError::Config(format!("필터 형식은 컬럼=값 입니다: {}", pair))
        })?;
        state
            .columns
            .entry(column.trim().to_string())
            .or_default()
            .insert(value.trim().to_string());
    }

    state.fee_buckets = fee_buckets.into_iter().collect();
    state.deposit_buckets = deposit_buckets.into_iter().collect();
    state.mileage_buckets = mileage_buckets.into_iter().collect();
    state.age_buckets = age_buckets.into_iter().collect();

    // 표시 중인 기간의 첫 항목이 요금 구간 필터의 기준 기간
    state.reference_term = terms.first().copied().unwrap_or_default();

    Ok(state)
}
