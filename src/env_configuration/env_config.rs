use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    애플리케이션의 필수 설정값들이 환경변수로 관리되므로, 해당 환경변수가 없으면
    애플리케이션이 정상 동작할 수 없기 때문에 panic으로 즉시 종료시킨다.

    1. 환경변수 `key`에 해당하는 값을 `env::var()`로 조회
    2. 값이 존재하면 해당 값을 문자열로 반환
    3. 값이 없으면:
       - 에러 메시지를 구성하여 error 레벨로 로깅
       - 동일한 메시지로 panic 발생시켜 애플리케이션 종료

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Returns
    * `String` - 환경변수 값

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    서버 설정 정보 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `SERVER_CONFIG_PATH` 환경변수를 통해 TOML 형식의 서버 설정 파일 경로를 지정받는다.
    이 파일에는 블로그 ajax 엔드포인트 정보(base_url, 타임아웃)와 시스템 설정
    (스냅샷 저장 경로, 차트 출력 경로 등) 애플리케이션 실행에 필요한 설정 정보가 포함되어 있다.
    once_lazy를 사용하여 첫 접근 시에만 초기화되며, 이후에는 캐시된 값을 재사용한다.

    # 예상 파일 내용
    - 블로그 서버 정보 (base_url, timeout_sec)
    - 시스템 설정 (data_dir, chart_dir, monthly_gate_yn)

    # Panics
    `SERVER_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = r#"
    수집 대상 게시글 목록 설정 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `TRACKED_POST_LIST_PATH` 환경변수를 통해 TOML 형식의 게시글 목록 파일 경로를 지정받는다.
    이 파일에는 게시글별 통계(조회/추천/반대/댓글 수)를 수집할 게시글 ID 들이 포함되어 있다.
    once_lazy를 사용하여 첫 접근 시에만 초기화되며, 이후에는 캐시된 값을 재사용한다.

    # 예상 파일 내용
    수집 대상 게시글 ID 목록 (TOML 형식)

    # Panics
    `TRACKED_POST_LIST_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static TRACKED_POST_LIST_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("TRACKED_POST_LIST_PATH"));

// #[doc = "Function to globally initialize the 'DATA_DIR_PATH' variable"]
// pub static DATA_DIR_PATH: once_lazy<String> =
//     once_lazy::new(|| String::from("data"));
