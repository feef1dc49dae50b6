//! 通用宏定义
//!
//! 提供减少样板代码的辅助宏。

/// 为结构体实现Default trait的宏
///
/// # 示例
///
/// ```ignore
/// impl_default!(MyConfig {
///     rate: 75.0,
///     enabled: true,
/// });
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}
