//! 响应类型（ResponseType）
//!
//! 描述一次查询期望得到的结果形态与载荷类型：
//! - `InstanceResponseType<R>`：恰好一个实例，结果为 `R`；
//! - `OptionalResponseType<R>`：零或一个实例，结果为 `Option<R>`；
//! - `MultipleInstancesResponseType<R>`：实例集合，结果为 `Vec<R>`；
//! - `NullableInstanceResponseType<R>`：与单实例共用描述，结果允许为空，解析为 `Option<R>`。
//!
//! 响应类型本身是零大小的标记值，每次调用时新建；网关通过
//! [`ResponseTypeDescriptor`] 在运行时选择或校验处理器。
//!
use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::marker::PhantomData;

/// 响应形态
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Instance,
    OptionalInstance,
    MultipleInstances,
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Instance => "instance",
            ResponseKind::OptionalInstance => "optional_instance",
            ResponseKind::MultipleInstances => "multiple_instances",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 响应类型的运行时描述：形态 + 载荷类型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResponseTypeDescriptor {
    kind: ResponseKind,
    payload_type: &'static str,
    payload_type_id: TypeId,
}

impl ResponseTypeDescriptor {
    pub fn of<P: ?Sized + 'static>(kind: ResponseKind) -> Self {
        Self {
            kind,
            payload_type: type_name::<P>(),
            payload_type_id: TypeId::of::<P>(),
        }
    }

    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    pub fn payload_type(&self) -> &'static str {
        self.payload_type
    }

    pub fn payload_type_id(&self) -> TypeId {
        self.payload_type_id
    }

    /// 载荷类型是否为 `T`
    pub fn is_payload<T: ?Sized + 'static>(&self) -> bool {
        self.payload_type_id == TypeId::of::<T>()
    }
}

impl fmt::Display for ResponseTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.kind, self.payload_type)
    }
}

/// 响应类型协议
///
/// - `Payload`：调用方期望的载荷类型；
/// - `Output`：网关返回的 future 最终解析出的值；
/// - `KIND`：响应形态。
pub trait ResponseType: Send + Sync + 'static {
    type Payload: 'static;
    type Output: Send + 'static;

    const KIND: ResponseKind;

    fn descriptor(&self) -> ResponseTypeDescriptor {
        ResponseTypeDescriptor::of::<Self::Payload>(Self::KIND)
    }

    /// 将处理器产出的类型擦除结果还原为 `Output`，失败时原样交还
    fn convert(
        &self,
        response: Box<dyn Any + Send>,
    ) -> Result<Self::Output, Box<dyn Any + Send>> {
        response.downcast::<Self::Output>().map(|out| *out)
    }
}

// 各响应类型结构一致，仅形态与输出不同。
// 使用 `fn() -> R` 作为标记，使其 Send/Sync 与 R 无关。
macro_rules! response_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<R>(PhantomData<fn() -> R>);

        impl<R> $name<R> {
            pub fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<R> Default for $name<R> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<R> Clone for $name<R> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<R> Copy for $name<R> {}

        impl<R> fmt::Debug for $name<R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), type_name::<R>())
            }
        }
    };
    ($(#[$doc:meta])* $name:ident, $kind:expr, $output:ty) => {
        response_type!($(#[$doc])* $name);

        impl<R: Send + 'static> ResponseType for $name<R> {
            type Payload = R;
            type Output = $output;

            const KIND: ResponseKind = $kind;
        }
    };
}

response_type!(
    /// 恰好一个实例
    InstanceResponseType,
    ResponseKind::Instance,
    R
);

response_type!(
    /// 零或一个实例
    OptionalResponseType,
    ResponseKind::OptionalInstance,
    Option<R>
);

response_type!(
    /// 实例集合
    MultipleInstancesResponseType,
    ResponseKind::MultipleInstances,
    Vec<R>
);

response_type!(
    /// 至多一个实例：按单实例路由，处理器无结果时解析为 `None`
    NullableInstanceResponseType
);

impl<R: Send + 'static> ResponseType for NullableInstanceResponseType<R> {
    type Payload = R;
    type Output = Option<R>;

    // 与 InstanceResponseType<R> 描述一致，由同一处理器服务
    const KIND: ResponseKind = ResponseKind::Instance;

    fn convert(
        &self,
        response: Box<dyn Any + Send>,
    ) -> Result<Option<R>, Box<dyn Any + Send>> {
        match response.downcast::<Option<R>>() {
            Ok(out) => Ok(*out),
            Err(response) => response.downcast::<R>().map(|out| Some(*out)),
        }
    }
}

pub fn instance_of<R: Send + 'static>() -> InstanceResponseType<R> {
    InstanceResponseType::new()
}

pub fn nullable_instance_of<R: Send + 'static>() -> NullableInstanceResponseType<R> {
    NullableInstanceResponseType::new()
}

pub fn optional_instance_of<R: Send + 'static>() -> OptionalResponseType<R> {
    OptionalResponseType::new()
}

pub fn multiple_instances_of<R: Send + 'static>() -> MultipleInstancesResponseType<R> {
    MultipleInstancesResponseType::new()
}
