//! Geospatial commands

use super::Client;
use crate::error::Result;
use redis::geo::{RadiusOptions, Unit};
use redis::{cmd, FromRedisValue, ToRedisArgs};

impl Client {
    /// GEOADD key longitude latitude member [longitude latitude member ...]
    ///
    /// `members` is typically `(Coord::lon_lat(lon, lat), name)` or a slice of those.
    pub async fn geo_add<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, members: M) -> Result<RV> {
        self.query(cmd("GEOADD").arg(key).arg(members)).await
    }

    /// GEOPOS key member [member ...]
    pub async fn geo_pos<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, members: M) -> Result<RV> {
        self.query(cmd("GEOPOS").arg(key).arg(members)).await
    }

    /// GEORADIUS key longitude latitude radius unit [options]
    pub async fn geo_radius<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        longitude: f64,
        latitude: f64,
        radius: f64,
        unit: Unit,
        options: RadiusOptions,
    ) -> Result<RV> {
        self.query(
            cmd("GEORADIUS")
                .arg(key)
                .arg(longitude)
                .arg(latitude)
                .arg(radius)
                .arg(unit)
                .arg(options),
        )
        .await
    }

    /// GEORADIUS key longitude latitude radius unit STORE destination
    pub async fn geo_radius_store<K: ToRedisArgs, D: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        longitude: f64,
        latitude: f64,
        radius: f64,
        unit: Unit,
        destination: D,
    ) -> Result<RV> {
        self.query(
            cmd("GEORADIUS")
                .arg(key)
                .arg(longitude)
                .arg(latitude)
                .arg(radius)
                .arg(unit)
                .arg("STORE")
                .arg(destination),
        )
        .await
    }

    /// GEORADIUSBYMEMBER key member radius unit [options]
    pub async fn geo_radius_by_member<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        member: M,
        radius: f64,
        unit: Unit,
        options: RadiusOptions,
    ) -> Result<RV> {
        self.query(
            cmd("GEORADIUSBYMEMBER")
                .arg(key)
                .arg(member)
                .arg(radius)
                .arg(unit)
                .arg(options),
        )
        .await
    }

    /// GEORADIUSBYMEMBER key member radius unit STORE destination
    pub async fn geo_radius_by_member_store<K: ToRedisArgs, M: ToRedisArgs, D: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        member: M,
        radius: f64,
        unit: Unit,
        destination: D,
    ) -> Result<RV> {
        self.query(
            cmd("GEORADIUSBYMEMBER")
                .arg(key)
                .arg(member)
                .arg(radius)
                .arg(unit)
                .arg("STORE")
                .arg(destination),
        )
        .await
    }

    /// GEOSEARCH key FROMMEMBER|FROMLONLAT ... BYRADIUS|BYBOX ... [options]
    ///
    /// `query` is sent verbatim after the key.
    pub async fn geo_search<K: ToRedisArgs, Q: ToRedisArgs, RV: FromRedisValue>(&self, key: K, query: Q) -> Result<RV> {
        self.query(cmd("GEOSEARCH").arg(key).arg(query)).await
    }

    /// GEOSEARCHSTORE destination source ... [STOREDIST]
    pub async fn geo_search_store<D: ToRedisArgs, S: ToRedisArgs, Q: ToRedisArgs, RV: FromRedisValue>(
        &self,
        destination: D,
        source: S,
        query: Q,
    ) -> Result<RV> {
        self.query(cmd("GEOSEARCHSTORE").arg(destination).arg(source).arg(query))
            .await
    }

    /// GEODIST key member1 member2 unit
    pub async fn geo_dist<K: ToRedisArgs, M1: ToRedisArgs, M2: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        member1: M1,
        member2: M2,
        unit: Unit,
    ) -> Result<RV> {
        self.query(cmd("GEODIST").arg(key).arg(member1).arg(member2).arg(unit))
            .await
    }

    /// GEOHASH key member [member ...]
    pub async fn geo_hash<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, members: M) -> Result<RV> {
        self.query(cmd("GEOHASH").arg(key).arg(members)).await
    }
}
