use anyhow::Result;

pub trait WscCommand {
    fn exec(self) -> Result<()>;
}
