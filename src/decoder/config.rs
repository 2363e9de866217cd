use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static MIN_PARALLEL_BLOCKS: OnceLock<usize> = OnceLock::new();

pub(crate) fn min_parallel_blocks() -> usize {
    *MIN_PARALLEL_BLOCKS.get_or_init(|| parse_env_usize("PDF417_MIN_PARALLEL_BLOCKS", 4).max(1))
}

static RS_MAX_ERASURES: OnceLock<Option<usize>> = OnceLock::new();

pub(crate) fn rs_max_erasures_override() -> Option<usize> {
    *RS_MAX_ERASURES.get_or_init(|| {
        std::env::var("PDF417_RS_MAX_ERASURES")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
    })
}
