use std::sync::Arc;

use projection::{DefinitionSource, Projection};

use crate::builder::{Graticule, GraticuleSnapshot};
use crate::view::ViewState;

/// Supplies the current projection and view on demand.
///
/// Hosts implement this over their map or view object. The graticule pulls
/// from it in [`Graticule::refresh`]; the engine itself stays a pure
/// function of projection, view state and configuration.
pub trait ViewSource {
    fn projection(&self) -> Arc<Projection>;
    fn view_state(&self) -> ViewState;
}

impl Graticule {
    /// Bind a view source. Subsequent `refresh` calls pull from it.
    pub fn attach(&mut self, source: Box<dyn ViewSource>) {
        self.view_source = Some(source);
    }

    /// Unbind the view source, returning it to the caller.
    pub fn detach(&mut self) -> Option<Box<dyn ViewSource>> {
        self.view_source.take()
    }

    /// Pull the current projection and view from the attached source and
    /// rebuild. `None` when nothing is attached.
    pub fn refresh(&mut self, definitions: &dyn DefinitionSource) -> Option<&GraticuleSnapshot> {
        let (projection, view) = {
            let source = self.view_source.as_ref()?;
            (source.projection(), source.view_state())
        };
        self.set_projection(&projection, definitions);
        Some(self.rebuild(&view))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::ViewSource;
    use crate::builder::{Graticule, GraticuleConfig};
    use crate::view::ViewState;
    use foundation::bounds::Extent;
    use foundation::math::Vec2;
    use projection::{Projection, Registry};

    struct FixedView {
        registry: Registry,
        view: ViewState,
    }

    impl ViewSource for FixedView {
        fn projection(&self) -> Arc<Projection> {
            self.registry.get("EPSG:4326").unwrap()
        }

        fn view_state(&self) -> ViewState {
            self.view
        }
    }

    #[test]
    fn refresh_pulls_from_the_attached_source() {
        let registry = Registry::with_defaults();
        let view = ViewState::new(
            Extent::new([-20.0, -20.0], [20.0, 20.0]),
            Vec2::new(0.0, 0.0),
            0.1,
            1.0,
        );
        let mut graticule = Graticule::new(GraticuleConfig::default());

        assert!(graticule.refresh(&registry).is_none());

        graticule.attach(Box::new(FixedView {
            registry: Registry::with_defaults(),
            view,
        }));
        let snapshot = graticule.refresh(&registry).unwrap();
        assert!(!snapshot.meridians.is_empty());
        assert_eq!(graticule.revision(), 1);

        graticule.detach().unwrap();
        assert!(graticule.refresh(&registry).is_none());
        assert_eq!(graticule.revision(), 1);
    }
}
