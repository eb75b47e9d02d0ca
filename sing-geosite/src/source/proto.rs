//! v2fly routercommon 协议结构（GeoSiteList），使用 prost derive 直接定义，无需构建脚本

/// 站点列表根节点
#[derive(Clone, PartialEq, prost::Message)]
pub struct GeoSiteList {
    #[prost(message, repeated, tag = "1")]
    pub entry: Vec<GeoSite>,
}

/// 单个分类
#[derive(Clone, PartialEq, prost::Message)]
pub struct GeoSite {
    #[prost(string, tag = "1")]
    pub country_code: String,
    #[prost(message, repeated, tag = "2")]
    pub domain: Vec<Domain>,
    #[prost(string, tag = "3")]
    pub resource_hash: String,
    #[prost(string, tag = "4")]
    pub code: String,
}

/// 单条域名规则
#[derive(Clone, PartialEq, prost::Message)]
pub struct Domain {
    #[prost(enumeration = "domain::Type", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: String,
    #[prost(message, repeated, tag = "3")]
    pub attribute: Vec<domain::Attribute>,
}

pub mod domain {
    /// 域名匹配类型
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Plain = 0,
        Regex = 1,
        RootDomain = 2,
        Full = 3,
    }

    /// 域名属性（仅 key 参与分类，typed_value 解码后忽略）
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Attribute {
        #[prost(string, tag = "1")]
        pub key: String,
        #[prost(oneof = "attribute::TypedValue", tags = "2, 3")]
        pub typed_value: Option<attribute::TypedValue>,
    }

    pub mod attribute {
        #[derive(Clone, PartialEq, prost::Oneof)]
        pub enum TypedValue {
            #[prost(bool, tag = "2")]
            BoolValue(bool),
            #[prost(int64, tag = "3")]
            IntValue(i64),
        }
    }
}
