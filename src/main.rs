use apibench::entry;
use apibench::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
