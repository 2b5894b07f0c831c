use crate::common::*;

#[doc = "로그 출력 포맷 지정 함수"]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.args()
    )
}

#[doc = r#"
    전역 로거를 설정해주는 함수.

    1. `logs/` 디렉토리 하위에 일 단위로 로테이션되는 로그 파일을 생성
    2. 오래된 로그 파일은 10개까지만 보관
    3. 동일한 내용을 stdout 으로도 출력
"#]
pub fn set_global_logger() {
    let logger_handle = Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("[logger_utils->set_global_logger] invalid log spec: {:?}", e))
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(log_format)
        .start()
        .unwrap_or_else(|e| {
            panic!(
                "[logger_utils->set_global_logger] Failed to start the logger: {:?}",
                e
            )
        });

    /* 핸들이 drop 되면 로거가 종료되므로 프로세스가 끝날 때까지 유지한다 */
    std::mem::forget(logger_handle);
}
