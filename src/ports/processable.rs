/// Capability of producing a processing result.
pub trait Processable {
    fn process(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;

    #[test]
    fn sample_is_usable_as_trait_object() {
        let sample = Sample::new("x");
        let processable: &dyn Processable = &sample;
        assert_eq!(processable.process(), "processed");
    }
}
