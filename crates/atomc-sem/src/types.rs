//! AtomC's type model and the lattice rules the type analyser checks
//! expressions against.

use crate::symbol::SymbolId;

/// The four primitive bases plus `STRUCT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseType {
    Int,
    Double,
    Char,
    Void,
    Struct,
}

/// A value's type: a base, an optional struct reference, and an array
/// dimension.
///
/// `n` is `-1` for a scalar, `0` for an array of unspecified size (legal
/// only for function parameters and string literals), and any positive
/// integer for a fixed-size array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Type {
    pub base: BaseType,
    pub struct_ref: Option<SymbolId>,
    pub n: i32,
}

impl Type {
    pub const fn scalar(base: BaseType) -> Self {
        Type {
            base,
            struct_ref: None,
            n: -1,
        }
    }

    pub const fn struct_scalar(sym: SymbolId) -> Self {
        Type {
            base: BaseType::Struct,
            struct_ref: Some(sym),
            n: -1,
        }
    }

    /// Same base/struct-ref, but as an array of dimension `n`.
    pub const fn array_of(mut self, n: i32) -> Self {
        self.n = n;
        self
    }

    pub const fn is_array(&self) -> bool {
        self.n >= 0
    }
}

/// `canBeScalar`: scalar, non-struct.
pub fn can_be_scalar(t: &Type) -> bool {
    t.n < 0 && !matches!(t.base, BaseType::Struct)
}

fn is_arith_base(b: BaseType) -> bool {
    matches!(b, BaseType::Int | BaseType::Double | BaseType::Char)
}

/// `convTo`: can a value of type `src` convert to `dst`?
pub fn conv_to(src: &Type, dst: &Type) -> bool {
    if src.n < 0 && dst.n < 0 {
        if is_arith_base(src.base) && is_arith_base(dst.base) {
            return true;
        }
        if src.base == BaseType::Struct && dst.base == BaseType::Struct {
            return src.struct_ref == dst.struct_ref;
        }
        return false;
    }
    if src.n >= 0 && dst.n >= 0 {
        return is_arith_base(src.base) && is_arith_base(dst.base) && src.base == dst.base;
    }
    false
}

/// `arithTypeTo`: the promoted type of a binary arithmetic operation, if
/// both operands are scalar and numeric.
pub fn arith_type_to(a: &Type, b: &Type) -> Option<Type> {
    if a.n >= 0 || b.n >= 0 || !is_arith_base(a.base) || !is_arith_base(b.base) {
        return None;
    }
    if a.base == BaseType::Double || b.base == BaseType::Double {
        Some(Type::scalar(BaseType::Double))
    } else {
        Some(Type::scalar(BaseType::Int))
    }
}

/// `typeSize`: the number of bytes `t` occupies. `member_sizes` resolves the
/// sizes of a struct's members in declaration order without `Type` owning
/// the symbol arena itself (avoids a circular borrow between `Type` and the
/// symbol table).
pub fn type_size(t: &Type, member_sizes: impl Fn(SymbolId) -> Vec<u32>) -> u32 {
    let elem_size = |t: &Type| -> u32 {
        match t.base {
            BaseType::Int => 4,
            BaseType::Double => 8,
            BaseType::Char => 1,
            BaseType::Void => 0,
            BaseType::Struct => member_sizes(t.struct_ref.expect("struct type without symbol"))
                .into_iter()
                .sum(),
        }
    };
    if t.n > 0 {
        t.n as u32 * elem_size(t)
    } else {
        elem_size(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conv_to_allows_any_scalar_numeric_pair() {
        let int_t = Type::scalar(BaseType::Int);
        let double_t = Type::scalar(BaseType::Double);
        let char_t = Type::scalar(BaseType::Char);
        assert!(conv_to(&int_t, &double_t));
        assert!(conv_to(&double_t, &char_t));
        assert!(conv_to(&char_t, &int_t));
    }

    #[test]
    fn conv_to_rejects_scalar_to_array() {
        let int_t = Type::scalar(BaseType::Int);
        let int_arr = Type::scalar(BaseType::Int).array_of(0);
        assert!(!conv_to(&int_t, &int_arr));
    }

    #[test]
    fn arith_type_to_promotes_to_double() {
        let int_t = Type::scalar(BaseType::Int);
        let double_t = Type::scalar(BaseType::Double);
        assert_eq!(
            arith_type_to(&int_t, &double_t),
            Some(Type::scalar(BaseType::Double))
        );
    }

    #[test]
    fn arith_type_to_rejects_array_operand() {
        let int_t = Type::scalar(BaseType::Int);
        let int_arr = Type::scalar(BaseType::Int).array_of(3);
        assert_eq!(arith_type_to(&int_t, &int_arr), None);
    }

    #[test]
    fn can_be_scalar_excludes_struct_and_arrays() {
        assert!(can_be_scalar(&Type::scalar(BaseType::Int)));
        assert!(!can_be_scalar(&Type::scalar(BaseType::Int).array_of(2)));
    }

    #[test]
    fn type_size_scalars() {
        assert_eq!(type_size(&Type::scalar(BaseType::Int), |_| vec![]), 4);
        assert_eq!(type_size(&Type::scalar(BaseType::Double), |_| vec![]), 8);
        assert_eq!(type_size(&Type::scalar(BaseType::Char), |_| vec![]), 1);
    }

    #[test]
    fn type_size_sized_array_multiplies() {
        let arr = Type::scalar(BaseType::Int).array_of(10);
        assert_eq!(type_size(&arr, |_| vec![]), 40);
    }
}
