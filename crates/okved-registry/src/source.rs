use crate::Result;
use okved_core::OkvedEntry;

pub trait RegistrySource {
    fn source_name(&self) -> &'static str;
    fn fetch(&self) -> Result<Vec<OkvedEntry>>;
}
