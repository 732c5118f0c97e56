//! Integration tests for Layer 2: Parser
//!
//! Tests for whole-interface parsing, extension merging, and recovery from
//! malformed declarations.

mod interfaces;
mod merging;
mod recovery;

/// A trimmed-down but realistic interface file.
pub const SAMPLE: &str = r#"// swift-interface-format-version: 1.0
// swift-module-flags: -target arm64-apple-macos12.0 -module-name Geometry
import Swift
import _Concurrency

@frozen public struct Point : Swift.Equatable {
  public var x: Swift.Double
  public var y: Swift.Double
  public init(x: Swift.Double, y: Swift.Double)
  public static func == (a: Geometry.Point, b: Geometry.Point) -> Swift.Bool
}
public enum Shape {
  case circle(center: Geometry.Point, radius: Swift.Double)
  case polygon([Geometry.Point])
  public var area: Swift.Double {
    get
  }
}
public protocol Drawable : AnyObject {
  associatedtype Canvas
  func draw(on canvas: Self.Canvas)
}
extension Geometry.Point {
  public func distance(to other: Geometry.Point) -> Swift.Double
}
extension Geometry.Shape : Swift.Hashable {
  public func hash(into hasher: inout Swift.Hasher)
}
extension Swift.Array where Element == Geometry.Point {
  public var centroid: Geometry.Point? {
    get
  }
}
#if compiler(>=5.3) && $AsyncAwait
extension Geometry.Shape {
  public func render() async throws -> [Swift.UInt8]
}
#endif
"#;
