use clap::{Parser, Subcommand};
use fleet_lease_common::{AgeBucket, DepositBucket, FeeBucket, MileageBucket, Term};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleet-lease")]
#[command(about = "리스 차량 매물 조회·필터링 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 시트 CSV URL (기본: 발행된 매물 시트)
    #[arg(long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 매물 목록을 조회해 표로 출력
    List {
        /// 통합 검색어 (모든 필드, 대소문자 무시)
        #[arg(short, long)]
        search: Option<String>,

        /// 컬럼 값 필터 (컬럼=값, 반복 지정 가능)
        #[arg(short = 'f', long = "filter", value_name = "컬럼=값")]
        filters: Vec<String>,

        /// 표시할 계약 기간 (36/48/60, 반복 지정).
        /// 첫 번째 기간이 대여료/보증금 구간 필터의 기준이 된다
        #[arg(short, long, default_value = "36")]
        term: Vec<Term>,

        /// 대여료 구간 (예: "50만원 미만")
        #[arg(long = "fee")]
        fee_buckets: Vec<FeeBucket>,

        /// 보증금 구간 (예: "100~300만원")
        #[arg(long = "deposit")]
        deposit_buckets: Vec<DepositBucket>,

        /// 주행거리 구간 (예: "1~3만km")
        #[arg(long = "mileage")]
        mileage_buckets: Vec<MileageBucket>,

        /// 차령 구간 (예: "3~5년")
        #[arg(long = "age")]
        age_buckets: Vec<AgeBucket>,

        /// 정렬 컬럼 (금액/주행거리 컬럼은 숫자 비교)
        #[arg(long)]
        sort: Option<String>,

        /// 오름차순 정렬 (기본: 내림차순)
        #[arg(long)]
        asc: bool,

        /// 최대 출력 행 수
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// 차량번호로 상세 정보 출력
    Show {
        /// 차량번호 (예: 123가4567)
        #[arg(required = true)]
        vehicle_no: String,

        /// 전달용 텍스트로 출력 (담당자 정보 포함)
        #[arg(long)]
        share: bool,

        /// 대여료 표시 기준 계약 기간
        #[arg(short, long, default_value = "36")]
        term: Term,
    },

    /// 표시 컬럼 헤더만 담은 엑셀 파일 생성
    Export {
        /// 출력 파일 (기본: 매물목록.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 헤더에 포함할 계약 기간 (반복 지정)
        #[arg(short, long, default_value = "36")]
        term: Vec<Term>,
    },

    /// 담당자 정보 표시/수정
    Profile {
        /// 대화식으로 수정
        #[arg(long)]
        edit: bool,
    },
}
