/// How consecutive vertices are assembled into primitives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    TriangleList,
    /// Every vertex after the second closes a triangle with the first one.
    TriangleFan,
    LineStrip,
    LineList,
}

impl Topology {
    /// Matching wgpu topology. Fans have none; expand them with
    /// [`Geometry::to_triangle_list`](super::Geometry::to_triangle_list) first.
    pub fn to_wgpu(self) -> Option<wgpu::PrimitiveTopology> {
        match self {
            Self::TriangleList => Some(wgpu::PrimitiveTopology::TriangleList),
            Self::TriangleFan => None,
            Self::LineStrip => Some(wgpu::PrimitiveTopology::LineStrip),
            Self::LineList => Some(wgpu::PrimitiveTopology::LineList),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fans_have_no_direct_wgpu_topology() {
        assert_eq!(Topology::TriangleFan.to_wgpu(), None);
        assert_eq!(
            Topology::LineStrip.to_wgpu(),
            Some(wgpu::PrimitiveTopology::LineStrip)
        );
    }
}
