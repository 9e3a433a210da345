use super::error::GlResult;
use cgmath::{Vector2, Vector3, Vector4};

/// Types that can be laid out as vertex attributes in an array buffer.
///
/// Unsafe because `define_attribs` must describe the in-memory layout of
/// `Self` exactly, or the GL will read past the end of the buffer.
pub unsafe trait VertexAttribute {
    /// Issue the appropriate calls to `glVertexAttribPointer` based on the
    /// layout of this type. Returns the total amount of attribute slots used
    /// by this layout, so that the next type can start after them.
    fn define_attribs(base_slot: u32, offset: u32) -> GlResult<u32>;
    const NUM_ATTRS: usize;
    /// Amount of scalar components per attribute slot.
    const COMPONENTS: i32;
}

macro_rules! layout_simple {
    ($type:ty: $gl_type:ident $amount:expr) => {
        unsafe impl VertexAttribute for $type {
            fn define_attribs(slot: u32, offset: u32) -> GlResult<u32> {
                unsafe {
                    let stride = ::std::mem::size_of::<Self>() as i32;
                    let offset = offset as usize as *const _;
                    gl_call!(EnableVertexAttribArray(slot))?;
                    gl_call!(VertexAttribPointer(
                        slot,
                        $amount,
                        ::gl::$gl_type,
                        ::gl::FALSE,
                        stride,
                        offset
                    ))?;
                    Ok(1)
                }
            }

            const NUM_ATTRS: usize = 1;
            const COMPONENTS: i32 = $amount;
        }
    };
}

unsafe impl VertexAttribute for () {
    fn define_attribs(_slot: u32, _offset: u32) -> GlResult<u32> {
        Ok(0)
    }
    const NUM_ATTRS: usize = 0;
    const COMPONENTS: i32 = 0;
}

layout_simple!(f32: FLOAT 1);
layout_simple!((f32, f32): FLOAT 2);
layout_simple!((f32, f32, f32): FLOAT 3);
layout_simple!((f32, f32, f32, f32): FLOAT 4);
layout_simple!([f32; 2]: FLOAT 2);
layout_simple!([f32; 3]: FLOAT 3);
layout_simple!([f32; 4]: FLOAT 4);
layout_simple!(Vector2<f32>: FLOAT 2);
layout_simple!(Vector3<f32>: FLOAT 3);
layout_simple!(Vector4<f32>: FLOAT 4);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    fn packed<T: VertexAttribute>() -> bool {
        size_of::<T>() == T::COMPONENTS as usize * size_of::<f32>()
    }

    #[test]
    fn vector3_is_one_packed_slot() {
        assert_eq!(<Vector3<f32> as VertexAttribute>::NUM_ATTRS, 1);
        assert_eq!(<Vector3<f32> as VertexAttribute>::COMPONENTS, 3);
        assert_eq!(size_of::<Vector3<f32>>(), 12);
    }

    #[test]
    fn float_layouts_are_tightly_packed() {
        assert!(packed::<f32>());
        assert!(packed::<[f32; 3]>());
        assert!(packed::<Vector2<f32>>());
        assert!(packed::<Vector3<f32>>());
        assert!(packed::<Vector4<f32>>());
    }

    #[test]
    fn unit_uses_no_slots() {
        assert_eq!(<() as VertexAttribute>::NUM_ATTRS, 0);
        assert_eq!(<() as VertexAttribute>::define_attribs(0, 0), Ok(0));
    }
}
